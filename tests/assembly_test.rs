//! End-to-end compose file assembly on a realistic group layout.

use boxer::{ComposeAssembler, ComposeKind, ContainerOrder, Group};
use std::fs;

#[test]
fn run_document_for_demo_group() {
    let tmp = tempfile::tempdir().unwrap();
    let group = Group::new("demo", tmp.path());
    fs::create_dir(group.dir()).unwrap();

    let api = group.dir().join("box.api");
    fs::create_dir(&api).unwrap();
    fs::write(
        api.join("run.yml"),
        "# api service\n  api:\n    image: api:latest\n",
    )
    .unwrap();

    let db = group.dir().join("box.db");
    fs::create_dir(&db).unwrap();
    fs::write(
        db.join("run.yml"),
        "# db service\n  db:\n    image: postgres:15\n",
    )
    .unwrap();

    let out = ComposeAssembler::new(&group, ContainerOrder::Name)
        .assemble(ComposeKind::Run)
        .unwrap();
    assert_eq!(out, tmp.path().join("demo.boxes/docker-compose.run.yml"));

    let text = fs::read_to_string(out).unwrap();
    assert!(text.starts_with("version: '3.1'\n"));
    assert!(text.contains("services:"));

    // Container blocks in container order, comments gone
    let api_pos = text.find("  api:").unwrap();
    let db_pos = text.find("  db:").unwrap();
    assert!(api_pos < db_pos);
    assert!(!text.contains('#'));
}

#[test]
fn build_document_ignores_run_fragments() {
    let tmp = tempfile::tempdir().unwrap();
    let group = Group::new("demo", tmp.path());
    fs::create_dir(group.dir()).unwrap();

    let api = group.dir().join("box.api");
    fs::create_dir(&api).unwrap();
    fs::write(api.join("build.yml"), "  api:\n    build: ./box.api\n").unwrap();
    fs::write(api.join("run.yml"), "  api:\n    image: api:latest\n").unwrap();

    let out = ComposeAssembler::new(&group, ContainerOrder::Name)
        .assemble(ComposeKind::Build)
        .unwrap();
    let text = fs::read_to_string(out).unwrap();
    assert!(text.contains("build: ./box.api"));
    assert!(!text.contains("image: api:latest"));
}
