//! Parse -> trace -> replay flow.

use graph_trace::*;

fn main() {
    let text = "graph TD
    Root((Root)) --> A[Branch A]
    Root --> B[Branch B]
    A --> A1[Leaf A1]
    A --> A2[Leaf A2] %% second leaf
    B --> B1[Leaf B1]
    B -.-> B2[Leaf B2]";

    let model = parse(text);
    println!(
        "Parsed {} nodes and {} edges, root {:?}",
        model.node_count(),
        model.edge_count(),
        model.start_node()
    );

    for mode in TraversalMode::ALL {
        let trace = generate_trace(&model, mode);
        println!("\n{} ({} steps):", mode, trace.len());
        for index in 0..trace.len() {
            if let Some(f) = frame(&trace, index, 1) {
                println!(
                    "  [{}] {:<24} {}: {:?}",
                    f.counter, f.step.message, f.step.frontier_kind, f.step.frontier
                );
            }
        }
    }

    let edited = parse("graph TD\nRoot --> A\nRoot --> C");
    let diff = NodeDiff::between(&model, &edited);
    println!("\nAfter edit: +{:?} -{:?}", diff.added, diff.removed);
}
