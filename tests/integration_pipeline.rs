// tests/integration_pipeline.rs
//! End-to-end runs over small on-disk corpora.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wikirank_core::config::PipelineConfig;
use wikirank_core::discovery::{self, classify, FileRole};
use wikirank_core::exit::RankExit;
use wikirank_core::output::write_ranking;
use wikirank_core::{Pipeline, RankError};

fn page(title: &str, text: &str) -> String {
    format!(
        "  <page>\n    <title>{title}</title>\n    <ns>0</ns>\n    <revision>\n      \
         <text xml:space=\"preserve\">{text}</text>\n    </revision>\n  </page>\n"
    )
}

fn write_dump(root: &Path, name: &str, pages: &[String]) {
    let body: String = pages.concat();
    fs::write(
        root.join(name),
        format!(
            "<mediawiki xmlns=\"http://www.mediawiki.org/xml/export-0.10/\" xml:lang=\"en\">\n\
             <siteinfo><sitename>Test</sitename></siteinfo>\n{body}</mediawiki>\n"
        ),
    )
    .unwrap();
}

fn cycle_corpus() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("wiki-index.txt"), "0:1:A\n0:2:B\n0:3:C\n").unwrap();
    write_dump(d.path(), "wiki-pages1.xml", &[page("A", "[[B]]"), page("B", "[[c]]")]);
    write_dump(d.path(), "wiki-pages2.xml", &[page("C", "[[A|first]]")]);
    fs::write(d.path().join("README.md"), "not part of the corpus").unwrap();
    d
}

#[test]
fn test_cycle_end_to_end() {
    let d = cycle_corpus();
    let mut config = PipelineConfig::new(d.path());
    config.iterations = 1;
    config.damping = 0.85;
    config.parallelism = 2;

    let report = Pipeline::new(config).run().unwrap();
    assert_eq!(report.articles, 3);
    assert_eq!(report.links, 3);
    assert_eq!(report.dangling, 0);
    assert_eq!(report.index_files, 1);
    assert_eq!(report.page_files, 2);
    assert!((report.mass - 1.0).abs() < 1e-12);

    let titles: Vec<&str> = report.ranked.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
    for entry in &report.ranked {
        assert!((entry.score - 1.0 / 3.0).abs() < 1e-12);
    }

    let out = d.path().join("pagerank.txt");
    write_ranking(&out, &report.ranked).unwrap();
    assert_eq!(
        fs::read_to_string(out).unwrap(),
        "A\t0.333333\nB\t0.333333\nC\t0.333333\n"
    );
}

#[test]
fn test_entities_links_and_dangling_end_to_end() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join("index1.txt"),
        "0:10:Rock &amp; Roll\n0:11:Music\n",
    )
    .unwrap();
    fs::write(d.path().join("index2.txt"), "0:12:Guitar\n").unwrap();
    write_dump(
        d.path(),
        "dump-a.xml",
        &[
            page("Rock &amp; Roll", "[[music]] uses [[Guitar|guitars]] and [[Drums]]"),
            page("Music", "See [[Rock &amp; Roll]]."),
        ],
    );
    write_dump(d.path(), "dump-b.xml", &[page("Guitar", "An instrument.")]);

    let mut config = PipelineConfig::new(d.path());
    config.iterations = 25;
    let report = Pipeline::new(config).run().unwrap();

    assert_eq!(report.articles, 3);
    assert_eq!(report.links, 3);
    assert_eq!(report.dangling, 1);
    assert!((report.mass - 1.0).abs() < 1e-9);
    let mut titles: Vec<&str> = report.ranked.iter().map(|e| e.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Guitar", "Music", "Rock & Roll"]);
}

#[test]
fn test_parallel_and_serial_runs_agree() {
    let d = cycle_corpus();
    let run = |workers| {
        let mut config = PipelineConfig::new(d.path());
        config.iterations = 10;
        config.parallelism = workers;
        Pipeline::new(config).run().unwrap().ranked
    };
    assert_eq!(run(1), run(4));
}

#[test]
fn test_index_dump_mismatch_is_integrity_failure() {
    let d = cycle_corpus();
    write_dump(d.path(), "wiki-pages3.xml", &[page("Unindexed", "[[A]]")]);

    let err = Pipeline::new(PipelineConfig::new(d.path())).run().unwrap_err();
    assert!(matches!(err, RankError::UnknownTitle { .. }));
    assert_eq!(RankExit::from(&err), RankExit::IntegrityFailure);
}

#[test]
fn test_toml_config_is_applied() {
    let d = cycle_corpus();
    fs::write(
        d.path().join("wikirank.toml"),
        "iterations = 7\ndamping = 0.5\nparallelism = 3\n",
    )
    .unwrap();
    let config = PipelineConfig::load(d.path()).unwrap();
    assert_eq!(config.iterations, 7);
    assert_eq!(config.damping, 0.5);
    assert_eq!(config.parallelism, 3);
    assert_eq!(config.output_path(), d.path().join("pagerank.txt"));
}

#[test]
fn test_unknown_toml_key_rejected() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("wikirank.toml"), "alpha = 0.5\n").unwrap();
    let err = PipelineConfig::load(d.path()).unwrap_err();
    assert!(matches!(err, RankError::Config(_)));
    assert_eq!(RankExit::from(&err), RankExit::InvalidInput);
}

#[test]
fn test_invalid_settings_rejected_before_any_work() {
    let d = cycle_corpus();
    for (damping, parallelism) in [(0.0, 2), (1.5, 2), (f64::NAN, 2), (0.85, 0)] {
        let mut config = PipelineConfig::new(d.path());
        config.damping = damping;
        config.parallelism = parallelism;
        let err = Pipeline::new(config).run().unwrap_err();
        assert!(matches!(err, RankError::Config(_)));
    }
}

#[test]
fn test_missing_root_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = Pipeline::new(PipelineConfig::new(d.path().join("absent")))
        .run()
        .unwrap_err();
    assert!(matches!(err, RankError::Io { .. }));
    assert_eq!(RankExit::from(&err), RankExit::Error);
}

#[test]
fn test_discovery_classifies_and_sorts() {
    let d = cycle_corpus();
    fs::create_dir(d.path().join("more")).unwrap();
    fs::write(d.path().join("more/extra-index.txt"), "0:4:D\n").unwrap();
    fs::write(d.path().join("more/a-pages.xml"), "<mediawiki/>").unwrap();

    let files = discovery::discover(d.path()).unwrap();
    assert_eq!(
        files.index_files,
        vec![d.path().join("more/extra-index.txt"), d.path().join("wiki-index.txt")]
    );
    assert_eq!(
        files.page_files,
        vec![
            d.path().join("more/a-pages.xml"),
            d.path().join("wiki-pages1.xml"),
            d.path().join("wiki-pages2.xml"),
        ]
    );
    assert_eq!(classify(Path::new("enwiki-multistream-index1.txt.xml")), Some(FileRole::Index));
    assert_eq!(classify(Path::new("notes.txt")), None);
}
