//! Simple inspector for HAL JSON documents.
//!
//! ```text
//! RUST_LOG=hal_resource=debug cargo run --example inspect -- order.json
//! ```

use std::fs;

use hal_resource::{Link, Resource, parse};

fn format_link(link: &Link) -> String {
    let mut out = link.href().to_string();
    if link.is_templated() {
        out.push_str(" (templated)");
    }
    if let Some(name) = link.name() {
        out.push_str(&format!(" name={}", name));
    }
    if let Some(title) = link.title() {
        out.push_str(&format!(" title={:?}", title));
    }
    out
}

fn print_resource(resource: &Resource, indent: usize) {
    let pad = "  ".repeat(indent);

    for (key, value) in resource.properties() {
        let rendered = value.to_string();
        if rendered.chars().count() > 80 {
            let preview: String = rendered.chars().take(80).collect();
            println!("{pad}{key}: {preview}...");
        } else {
            println!("{pad}{key}: {rendered}");
        }
    }

    for (relation, links) in resource.links().iter() {
        for link in links {
            println!("{pad}link {relation} -> {}", format_link(link));
        }
    }

    for (relation, children) in resource.embedded().iter() {
        for (i, child) in children.iter().enumerate() {
            println!("{pad}embedded {relation}[{i}] {}", child.href().unwrap_or("<no self>"));
            print_resource(child, indent + 1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "resource.json".to_string());

    println!("Reading: {}", path);

    let text = fs::read_to_string(&path).expect("Failed to read file");
    println!("File size: {} bytes", text.len());

    let resource = parse(&text).expect("Failed to parse");

    println!("\n=== Resource ===");
    println!("Self: {}", resource.href().unwrap_or("<none>"));
    for curie in resource.namespaces() {
        println!("Namespace: {}", format_link(curie));
    }
    println!();
    print_resource(&resource, 0);
}
