use std::fs;
use tempfile::tempdir;
use yyc3_docs_core::{Category, DocArtifact, Scaffolder, Stage};

const EXAMPLE_STAGES: &[Stage] = &[Stage {
    name: "S",
    categories: &[Category {
        name: "C",
        titles: &["Alpha", "Beta"],
    }],
}];

#[test]
fn file_names_are_deterministic() {
    let artifact = DocArtifact {
        stage: "S",
        category: "C",
        title: "Alpha",
        index: 1,
    };
    assert_eq!(artifact.file_name(), "01-YYC3-Menu-C-Alpha.md");
    assert_eq!(artifact.file_name(), artifact.file_name());
}

#[test]
fn minimal_taxonomy_end_to_end() {
    let scratch = tempdir().unwrap();
    let root = scratch.path().join("docs");

    let scaffolder = Scaffolder::new(&root, EXAMPLE_STAGES);
    let mut sink = Vec::new();
    let report = scaffolder.run_to(&mut sink).unwrap();

    assert_eq!(report.created_dirs, 3);
    assert_eq!(report.created_files, 2);

    let alpha = root.join("S").join("C").join("01-YYC3-Menu-C-Alpha.md");
    let beta = root.join("S").join("C").join("02-YYC3-Menu-C-Beta.md");
    assert!(alpha.is_file());
    assert!(beta.is_file());

    let expected_alpha = "# Alpha\n\
                          ## 文档信息\n\
                          - 文档类型：C\n\
                          - 所属阶段：S\n\
                          - 遵循规范：五高五标五化要求\n\
                          - 版本号：V1.0\n\
                          \n\
                          ## 核心内容\n";
    assert_eq!(fs::read_to_string(&alpha).unwrap(), expected_alpha);

    let beta_content = fs::read_to_string(&beta).unwrap();
    assert!(beta_content.starts_with("# Beta\n"));
    assert!(beta_content.ends_with("## 核心内容\n"));
}

#[test]
fn repeated_runs_produce_identical_paths() {
    let scratch = tempdir().unwrap();
    let root = scratch.path().join("docs");
    let scaffolder = Scaffolder::new(&root, EXAMPLE_STAGES);

    scaffolder.run_to(&mut Vec::new()).unwrap();
    let first: Vec<_> = fs::read_dir(root.join("S").join("C"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();

    scaffolder.run_to(&mut Vec::new()).unwrap();
    let second: Vec<_> = fs::read_dir(root.join("S").join("C"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();

    let mut first_sorted = first.clone();
    first_sorted.sort();
    let mut second_sorted = second;
    second_sorted.sort();
    assert_eq!(first_sorted, second_sorted);
}
