//! Pattern Bank Matching
//!
//! This example matches the category sequence of each sentence against the
//! standard pattern bank and reports the first entry that accepts it.
//!
//! Key concepts:
//! - One linear-chain automaton per bank entry
//! - First-match in bank order
//! - Token-to-slot alignment for accepted sentences
//!
//! Run with: cargo run --example pattern_bank -- "Maria estuda matemática."

use clausula::analysis::StructureAnalyzer;
use std::error::Error;

const DEFAULT_SENTENCES: &[&str] = &[
    "O gato come o peixe.",
    "Maria estuda matemática.",
    "A professora explicou a matéria aos alunos.",
    "Gato o peixe come.",
];

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Pattern Bank Matching ===\n");

    let mut analyzer = StructureAnalyzer::new()?;
    println!("Bank holds {} patterns\n", analyzer.bank().len());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sentences: Vec<&str> = if args.is_empty() {
        DEFAULT_SENTENCES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for sentence in sentences {
        let analysis = analyzer.analyze(sentence);
        let categories: Vec<String> = analysis
            .categories()
            .iter()
            .map(ToString::to_string)
            .collect();

        println!("Sentence: {sentence}");
        println!("  Categories: {}", categories.join(" "));

        match &analysis.matched {
            Some(found) => {
                println!("  Matched pattern {}", found.index);
                for (token, slot) in analysis.alignment() {
                    println!("    {:<12} {}", token.surface, slot);
                }
            }
            None => println!("  No pattern matched"),
        }
        println!();
    }

    Ok(())
}
