//! Role Mode Analysis
//!
//! This example tags sentences with syntactic roles and validates them against
//! the ten-state role automaton.
//!
//! Key concepts:
//! - Tagging with permissive degradation (stray words become `unrecognized`)
//! - Validation path through states q0..q9
//! - Clause breakdown into subject, predicate and objects
//! - JSON analysis records for downstream renderers
//!
//! Run with: cargo run --example analyze_sentence -- "O gato come o peixe."

use clausula::analysis::SyntaxAnalyzer;
use clausula::record::AnalysisRecord;
use std::error::Error;

const DEFAULT_SENTENCES: &[&str] = &[
    "O gato come o peixe.",
    "Ela é bonita.",
    "O professor explicou a matéria aos alunos.",
    "O gato come o peixe",
];

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Role Mode Analysis ===\n");

    let mut analyzer = SyntaxAnalyzer::new()?;
    println!("{}\n", analyzer.automaton());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sentences: Vec<&str> = if args.is_empty() {
        DEFAULT_SENTENCES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for sentence in sentences {
        let analysis = analyzer.analyze(sentence);

        println!("Sentence: {sentence}");
        for token in &analysis.tokens {
            println!("  '{}': {} -> {}", token.surface, token.category, token.role);
        }
        println!("  Path: {}", analysis.path.states().join(" -> "));

        if analysis.accepted {
            let parts = analyzer.clause_parts(&analysis);
            println!("  Valid structure");
            println!("    Subject:   {}", parts.subject.join(" "));
            println!("    Predicate: {}", parts.predicate.join(" "));
            if !parts.predicate_complement.is_empty() {
                println!("    Complement: {}", parts.predicate_complement.join(" "));
            }
            if !parts.direct_object.is_empty() {
                println!("    Direct object: {}", parts.direct_object.join(" "));
            }
            if !parts.indirect_object.is_empty() {
                println!("    Indirect object: {}", parts.indirect_object.join(" "));
            }
        } else {
            println!("  Invalid structure");
        }

        let record = AnalysisRecord::new(sentence, analysis);
        println!("  Record {} ({} bytes as JSON)\n", record.id, record.to_json()?.len());
    }

    Ok(())
}
