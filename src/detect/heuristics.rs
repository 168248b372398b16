//! Structure-based pattern scorers.
//!
//! Each scorer reads directory and file layout only and returns a candidate
//! when it saw any signal at all; the caller applies the report threshold.
//! Directory matching is against lowercased directory names anywhere in the
//! tree.

use super::PatternCandidate;
use crate::types::ProjectStructure;

type Scorer = fn(&ProjectStructure) -> Option<PatternCandidate>;

pub const SCORERS: &[(&str, Scorer)] = &[
    ("mvc", score_mvc),
    ("mvvm", score_mvvm),
    ("layered", score_layered),
    ("microservices", score_microservices),
    ("feature-based", score_feature_based),
    ("hexagonal", score_hexagonal),
    ("event-driven", score_event_driven),
];

const SOURCE: &str = "structure";

fn score_mvc(structure: &ProjectStructure) -> Option<PatternCandidate> {
    let dirs = structure.directory_names();
    let mut candidate = PatternCandidate::new("MVC", SOURCE);

    if dirs.contains("models") {
        candidate.score(25, "models/ directory");
    }
    if dirs.contains("views") {
        candidate.score(25, "views/ directory");
    }
    if dirs.contains("controllers") {
        candidate.score(30, "controllers/ directory");
    }
    let suffixed = structure
        .files
        .iter()
        .filter(|f| f.stem().to_lowercase().ends_with("controller"))
        .count();
    if suffixed > 0 {
        candidate.score(10, format!("{} *Controller files", suffixed));
    }
    emit(candidate)
}

fn score_mvvm(structure: &ProjectStructure) -> Option<PatternCandidate> {
    let dirs = structure.directory_names();
    let mut candidate = PatternCandidate::new("MVVM", SOURCE);

    if dirs.contains("viewmodels") {
        candidate.score(35, "viewmodels/ directory");
    }
    if dirs.contains("views") {
        candidate.score(25, "views/ directory");
    }
    if dirs.contains("models") {
        candidate.score(25, "models/ directory");
    }
    emit(candidate)
}

fn score_layered(structure: &ProjectStructure) -> Option<PatternCandidate> {
    const GROUPS: &[(&str, &[&str])] = &[
        ("presentation", &["presentation", "ui", "web"]),
        ("application", &["application", "services"]),
        ("domain", &["domain", "business", "core"]),
        (
            "infrastructure",
            &["infrastructure", "persistence", "data", "repositories"],
        ),
    ];
    let dirs = structure.directory_names();
    let mut candidate = PatternCandidate::new("Layered Architecture", SOURCE);

    for (layer, names) in GROUPS {
        if let Some(found) = names.iter().find(|n| dirs.contains(**n)) {
            candidate.score(20, format!("{} layer ({}/)", layer, found));
        }
    }
    emit(candidate)
}

fn score_microservices(structure: &ProjectStructure) -> Option<PatternCandidate> {
    let dirs = structure.directory_names();
    let mut candidate = PatternCandidate::new("Microservices", SOURCE);

    let service_roots = structure
        .directories
        .iter()
        .filter(|d| d.name.eq_ignore_ascii_case("services"))
        .map(|d| structure.subdirectories_of(&d.relative_path).len())
        .max()
        .unwrap_or(0);
    if service_roots >= 2 {
        candidate.score(30, format!("services/ with {} services", service_roots));
    }
    if structure
        .files
        .iter()
        .any(|f| f.name.starts_with("docker-compose"))
    {
        candidate.score(25, "docker-compose file");
    }
    let dockerfiles = structure
        .files
        .iter()
        .filter(|f| f.name == "Dockerfile")
        .count();
    if dockerfiles >= 2 {
        candidate.score(20, format!("{} Dockerfiles", dockerfiles));
    }
    if dirs.contains("k8s") || dirs.contains("kubernetes") || dirs.contains("helm") {
        candidate.score(15, "kubernetes manifests");
    }
    if dirs.contains("gateway") || dirs.contains("api-gateway") {
        candidate.score(10, "gateway/ directory");
    }
    emit(candidate)
}

fn score_feature_based(structure: &ProjectStructure) -> Option<PatternCandidate> {
    let dirs = structure.directory_names();
    let mut candidate = PatternCandidate::new("Feature-based", SOURCE);

    let root_name = if dirs.contains("features") {
        Some("features")
    } else if dirs.contains("modules") {
        Some("modules")
    } else {
        None
    };
    let Some(root_name) = root_name else {
        return None;
    };
    candidate.score(
        if root_name == "features" { 40 } else { 30 },
        format!("{}/ directory", root_name),
    );

    let feature_count = structure
        .directories
        .iter()
        .filter(|d| d.name.eq_ignore_ascii_case(root_name))
        .map(|d| structure.subdirectories_of(&d.relative_path).len())
        .max()
        .unwrap_or(0);
    if feature_count >= 3 {
        candidate.score(20, format!("{} feature modules", feature_count));
    }
    emit(candidate)
}

fn score_hexagonal(structure: &ProjectStructure) -> Option<PatternCandidate> {
    let dirs = structure.directory_names();
    let mut candidate = PatternCandidate::new("Hexagonal Architecture", SOURCE);

    if dirs.contains("adapters") {
        candidate.score(30, "adapters/ directory");
    }
    if dirs.contains("ports") {
        candidate.score(30, "ports/ directory");
    }
    if dirs.contains("domain") {
        candidate.score(20, "domain/ directory");
    }
    if dirs.contains("application") {
        candidate.score(15, "application/ directory");
    }
    emit(candidate)
}

fn score_event_driven(structure: &ProjectStructure) -> Option<PatternCandidate> {
    let dirs = structure.directory_names();
    let mut candidate = PatternCandidate::new("Event-driven", SOURCE);

    if dirs.contains("events") {
        candidate.score(25, "events/ directory");
    }
    if dirs.contains("handlers") || dirs.contains("listeners") {
        candidate.score(25, "handlers/ directory");
    }
    if dirs.contains("consumers") || dirs.contains("producers") {
        candidate.score(20, "consumer/producer directories");
    }
    if dirs.contains("subscribers") {
        candidate.score(10, "subscribers/ directory");
    }
    if dirs.contains("sagas") {
        candidate.score(10, "sagas/ directory");
    }
    emit(candidate)
}

fn emit(candidate: PatternCandidate) -> Option<PatternCandidate> {
    (candidate.confidence > 0).then_some(candidate)
}
