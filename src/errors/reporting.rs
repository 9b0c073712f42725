//! Completion reporting for batch conversion.

use super::collection::{BatchResults, OperationType};

/// One line per failed file, in processing order.
pub fn failure_lines<T>(results: &BatchResults<T>) -> Vec<String> {
    results.failures.iter().map(ToString::to_string).collect()
}

/// Brief counts, suitable for verbose output.
pub fn brief_summary<T>(results: &BatchResults<T>) -> String {
    if results.is_complete_success() {
        format!("Converted {} file(s)", results.success_count())
    } else {
        let breakdown = OperationType::ALL
            .iter()
            .map(|op| (op.as_str(), count_by_operation(results, *op)))
            .filter(|(_, count)| *count > 0)
            .map(|(op, count)| format!("{op}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Converted {} of {} file(s), {} failed ({breakdown})",
            results.success_count(),
            results.total_count(),
            results.failure_count()
        )
    }
}

pub fn count_by_operation<T>(results: &BatchResults<T>, operation: OperationType) -> usize {
    results
        .failures
        .iter()
        .filter(|f| f.operation == operation)
        .count()
}
