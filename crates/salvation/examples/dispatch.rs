use std::rc::Rc;

use salvation::{MatcherConfig, Possibly, PossiblyConfig};
use tracing_subscriber::EnvFilter;

fn classify_reading(reading: Option<i32>) -> Vec<&'static str> {
    let mut labels = Vec::new();
    Possibly::new(reading)
        .into_matcher_with(MatcherConfig::new().with_evaluate_all_cases(true))
        .case(|r| r.is_some_and(|c| c > 30), |_| labels.push("hot"))
        .case(|r| r.is_some_and(|c| c % 2 == 0), |_| labels.push("even"))
        .default(|p| labels.push(if p.is_absent() { "missing" } else { "unremarkable" }));
    labels
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
        .init();

    for reading in [Some(42), Some(17), None] {
        println!("{}: {:?}", Possibly::new(reading).describe_inner(), classify_reading(reading));
    }

    let owner = Rc::new(String::from("session"));
    let mut handle = Possibly::with_config(Rc::downgrade(&owner), PossiblyConfig::new().with_precompute(true));
    drop(owner);
    println!("cached present: {}", handle.is_present());
    handle.recompute_classification()?;
    println!("after recompute present: {}", handle.is_present());

    let name = Possibly::new(String::from("salvation"));
    println!("{}", name.describe());
    println!("len: {}", name.extract_or_error()?.len());
    Ok(())
}
