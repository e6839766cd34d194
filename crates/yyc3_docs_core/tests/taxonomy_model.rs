use std::collections::HashSet;
use yyc3_docs_core::{total_document_count, PROJECT_PREFIX, STAGES};

#[test]
fn taxonomy_has_seven_prefixed_stages() {
    assert_eq!(STAGES.len(), 7);
    for stage in STAGES {
        assert!(
            stage.name.starts_with(&format!("{PROJECT_PREFIX}-")),
            "stage {} lacks project prefix",
            stage.name
        );
    }
}

#[test]
fn every_stage_has_architecture_then_technique_category() {
    for stage in STAGES {
        let names: Vec<_> = stage
            .categories
            .iter()
            .map(|category| category.name)
            .collect();
        assert_eq!(names, vec!["架构类", "技巧类"], "stage {}", stage.name);
    }
}

#[test]
fn titles_are_unique_within_each_category() {
    for stage in STAGES {
        for category in stage.categories {
            let unique: HashSet<_> = category.titles.iter().collect();
            assert_eq!(
                unique.len(),
                category.titles.len(),
                "duplicate title in {}/{}",
                stage.name,
                category.name
            );
        }
    }
}

#[test]
fn total_document_count_matches_fixed_taxonomy() {
    assert_eq!(total_document_count(STAGES), 63);
}
