//! Cross-array length guard and the shared zip-and-build routine
//!
//! Every add-* operation funnels through `zip_build`: the required parallel
//! arrays are compared for length first, then one record is built per index
//! position. There is no state across calls; identical input yields identical
//! output.
use crate::error::AppError;

/// Check that every named required array has the same length and return it.
///
/// Runs after schema validation on purpose: the schema only checks per-array
/// element types, not cross-array consistency. The error names every field
/// that was compared.
pub fn ensure_parallel_lengths(fields: &[(&str, usize)]) -> Result<usize, AppError> {
    let expected = fields.first().map(|(_, len)| *len).unwrap_or(0);
    if fields.iter().any(|(_, len)| *len != expected) {
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        return Err(AppError::LengthMismatch(format!(
            "{} arrays must have the same length",
            join_names(&names)
        )));
    }
    Ok(expected)
}

/// Build one record per index position across the parallel arrays.
///
/// An empty set of inputs yields an empty result, not an error. Output order
/// is strictly the index order of the inputs.
pub fn zip_build<T>(
    fields: &[(&str, usize)],
    build: impl Fn(usize) -> T,
) -> Result<Vec<T>, AppError> {
    let len = ensure_parallel_lengths(fields)?;
    Ok((0..len).map(build).collect())
}

fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths_build_one_record_per_index() {
        let ids = ["a", "b", "c"];
        let timelines = [0.0, 500.0, 900.0];

        let records = zip_build(
            &[("ids", ids.len()), ("timelines", timelines.len())],
            |i| (ids[i], timelines[i]),
        )
        .unwrap();

        assert_eq!(records, vec![("a", 0.0), ("b", 500.0), ("c", 900.0)]);
    }

    #[test]
    fn mismatched_lengths_fail_and_name_every_field() {
        let result = zip_build(&[("ids", 2), ("images", 1), ("timelines", 2)], |i| i);

        match result {
            Err(AppError::LengthMismatch(msg)) => {
                assert_eq!(msg, "ids, images and timelines arrays must have the same length");
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn two_field_message_reads_naturally() {
        let err = ensure_parallel_lengths(&[("ids", 1), ("texts", 3)]).unwrap_err();
        match err {
            AppError::LengthMismatch(msg) => {
                assert_eq!(msg, "ids and texts arrays must have the same length");
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_arrays_yield_an_empty_record_set() {
        let records = zip_build(&[("ids", 0), ("timelines", 0)], |i| i).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn no_fields_yield_an_empty_record_set() {
        let records = zip_build(&[], |i| i).unwrap();
        assert!(records.is_empty());
    }
}
