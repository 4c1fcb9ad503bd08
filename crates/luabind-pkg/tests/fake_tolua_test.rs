//! End-to-end run against a stand-in tolua
//!
//! The stand-in copies the package to the requested output, which lets the
//! test check what tolua would have been handed.

#![cfg(unix)]

use luabind_core::Config;
use luabind_pkg::BindingPipeline;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

const FAKE_TOLUA: &str = "#!/bin/sh\n[ \"$1\" = \"-o\" ] || exit 2\ncp \"$3\" \"$2\"\n";

#[test]
fn test_generate_with_relative_tool() {
    let root = tempfile::tempdir().unwrap();
    let bindings = root.path().join("LuaLib").join("toluabindings");
    let tool_dir = root.path().join("tolua").join("bin");
    fs::create_dir_all(&bindings).unwrap();
    fs::create_dir_all(&tool_dir).unwrap();

    let tool = tool_dir.join("tolua");
    fs::write(&tool, FAKE_TOLUA).unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

    fs::write(bindings.join("lua_maapi.h"), "void onEvent(MAEvent* e);\n").unwrap();
    fs::write(bindings.join("lua_special_bindings.h"), "int EXTENT_X(MAExtent extent);\n").unwrap();
    fs::write(bindings.join("lua_systemapi.h"), "void SysFree(MACopyData* d);").unwrap();

    let config = Config {
        work_dir: bindings.clone(),
        tool: PathBuf::from("../../tolua/bin/tolua"),
        ..Config::default()
    };
    let report = BindingPipeline::new(config).unwrap().run().unwrap();

    let generated = fs::read_to_string(bindings.join("lua_maapi.c")).unwrap();
    assert_eq!(
        generated,
        "void onEvent(void* e);\nint EXTENT_X(MAExtent extent);\nvoid SysFree(void* d);"
    );
    assert_eq!(report.substitutions, 2);
    assert_eq!(report.generated, Some(bindings.join("lua_maapi.c")));
}
