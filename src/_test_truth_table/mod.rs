/// **(internal)** Explicitly test the pipeline on known tautologies and contradictions.
mod _test_truth_table_basic;

/// **(internal)** Generate pseudo-random expression trees, print them and exhaustively
/// verify that the truth table matches the tree.
mod _test_truth_table_fuzzing;
