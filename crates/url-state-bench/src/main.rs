//! Benchmark for query-string state synchronization.
//!
//! Times parsing, building, per-parameter decoding and batch merging over a
//! set of synthetic locations.
//!
//! Usage: `bench-query [descriptors.json] [iterations]`

use std::fs;
use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Deserialize;
use url_state::{
    BatchOptions, Location, ParamBinding, ParamDescriptor, ParamType, Value, batch_url,
    build_search, parse_search,
};

const DEFAULT_ITERATIONS: usize = 20_000;
const LOCATION_COUNT: usize = 64;

// =============================================================================
// CONFIG
// =============================================================================

/// Benchmark configuration file.
#[derive(Debug, Deserialize)]
struct BenchConfig {
    params: Vec<ParamDescriptor>,
}

fn default_params() -> Vec<ParamDescriptor> {
    let config: BenchConfig = serde_json::from_value(serde_json::json!({
        "params": [
            { "name": "q", "defaultValue": "" },
            { "name": "page", "type": "number", "defaultValue": 1 },
            { "name": "active", "defaultValue": false },
            { "name": "tags", "type": "array" },
            { "name": "filters", "type": "object" }
        ]
    }))
    .expect("built-in config is valid");
    config.params
}

// =============================================================================
// DATA GENERATION
// =============================================================================

/// Produces a deterministic sample value for a parameter.
fn sample_value(param_type: ParamType, i: usize) -> Value {
    match param_type {
        ParamType::String => Value::from(format!("term-{}", i)),
        ParamType::Number => Value::Number((i % 50) as f64 + 2.0),
        ParamType::Boolean => Value::Bool(i % 2 == 0),
        ParamType::Array => Value::Array((0..i % 5 + 1).map(|j| format!("tag{}", j)).collect()),
        ParamType::Object => {
            let mut map = url_state::ObjectMap::new();
            map.insert("category".to_string(), serde_json::json!(format!("c{}", i % 7)));
            map.insert("rank".to_string(), serde_json::json!(i));
            Value::Object(map)
        }
    }
}

fn make_locations(params: &[ParamDescriptor]) -> Vec<Location> {
    let empty = Location::new("/", "");
    (0..LOCATION_COUNT)
        .map(|i| {
            let updates = params.iter().map(|descriptor| {
                ParamBinding::new(descriptor.clone(), &empty)
                    .update(Some(&sample_value(descriptor.param_type(), i)))
                    .expect("sample value matches descriptor type")
            });
            Location::from_url(&batch_url(&empty, updates, &BatchOptions::default()))
        })
        .collect()
}

// =============================================================================
// TIMING
// =============================================================================

fn time<F: FnMut(usize)>(iterations: usize, mut f: F) -> Duration {
    let start = Instant::now();
    for i in 0..iterations {
        f(i);
    }
    start.elapsed()
}

fn report(label: &str, elapsed: Duration, iterations: usize) {
    let per_op = elapsed.as_nanos() as f64 / iterations as f64;
    println!("  {:<10} {:>10.2?} total, {:>8.0} ns/op", label, elapsed, per_op);
}

fn main() {
    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) => {
            println!("Loading descriptors from: {}", path);
            let json = fs::read_to_string(&path).expect("Failed to read descriptor file");
            let config: BenchConfig = serde_json::from_str(&json).expect("Failed to parse descriptors");
            config.params
        }
        None => default_params(),
    };
    let iterations = args
        .next()
        .map(|n| n.parse().expect("iterations must be a number"))
        .unwrap_or(DEFAULT_ITERATIONS);

    let locations = make_locations(&params);
    let avg_len = locations.iter().map(|l| l.search.len()).sum::<usize>() / locations.len();
    println!(
        "{} params, {} locations (avg search {} bytes), {} iterations",
        params.len(),
        locations.len(),
        avg_len,
        iterations
    );

    let parse = time(iterations, |i| {
        black_box(parse_search(&locations[i % LOCATION_COUNT].search));
    });

    let parsed: Vec<_> = locations.iter().map(|l| parse_search(&l.search)).collect();
    let build = time(iterations, |i| {
        black_box(build_search(&parsed[i % LOCATION_COUNT]));
    });

    let mut bindings: Vec<_> = params
        .iter()
        .map(|d| ParamBinding::new(d.clone(), &locations[0]))
        .collect();
    let mut transitions = 0usize;
    let observe = time(iterations, |i| {
        let location = &locations[i % LOCATION_COUNT];
        for binding in &mut bindings {
            if binding.observe(location) {
                transitions += 1;
            }
        }
    });

    let batch = time(iterations, |i| {
        let location = &locations[i % LOCATION_COUNT];
        let updates = bindings.iter().map(|b| {
            b.update(Some(&sample_value(b.descriptor().param_type(), i + 1)))
                .expect("sample value matches descriptor type")
        });
        black_box(batch_url(location, updates, &BatchOptions::default()));
    });

    println!("Results:");
    report("parse", parse, iterations);
    report("build", build, iterations);
    report("observe", observe, iterations);
    report("batch", batch, iterations);
    println!("  {} value transitions observed", transitions);
}
