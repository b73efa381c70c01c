use behaviour_layout::{
    get_array_size, get_variable_offset, get_variable_size, Hypothesis, LayoutError, Variable,
    VariableLayout, VariableType,
};
use proptest::prelude::*;
use proptest::sample::select;
use std::thread;
use strum::IntoEnumIterator;

fn hypotheses() -> impl Strategy<Value = Hypothesis> {
    select(Hypothesis::iter().collect::<Vec<_>>())
}

fn variable_types() -> impl Strategy<Value = VariableType> {
    select(VariableType::iter().collect::<Vec<_>>())
}

/// Variables with unique names `v0`, `v1`, ...
fn variables(max_len: usize) -> impl Strategy<Value = Vec<Variable>> {
    prop::collection::vec(variable_types(), 0..max_len).prop_map(|types| {
        types
            .into_iter()
            .enumerate()
            .map(|(i, t)| Variable::new(format!("v{}", i), t).unwrap())
            .collect()
    })
}

proptest! {
    #[test]
    fn scalars_have_size_one(h in hypotheses()) {
        prop_assert_eq!(get_variable_size(&Variable::scalar("T").unwrap(), h), 1);
    }

    #[test]
    fn vectors_have_dimension_size(h in hypotheses()) {
        prop_assert_eq!(get_variable_size(&Variable::vector("u").unwrap(), h), h.space_dimension());
    }

    #[test]
    fn array_size_is_the_sum_of_sizes(vs in variables(24), h in hypotheses()) {
        let total: usize = vs.iter().map(|v| get_variable_size(v, h)).sum();
        prop_assert_eq!(get_array_size(&vs, h), total);
    }

    #[test]
    fn offsets_are_prefix_sums(vs in variables(24), h in hypotheses()) {
        let mut expected = 0;
        for v in &vs {
            prop_assert_eq!(get_variable_offset(&vs, v.name(), h), Ok(expected));
            expected += get_variable_size(v, h);
        }
        if let Some(first) = vs.first() {
            prop_assert_eq!(get_variable_offset(&vs, first.name(), h), Ok(0));
        }
    }

    #[test]
    fn unknown_names_are_not_found(vs in variables(24), h in hypotheses()) {
        prop_assert_eq!(
            get_variable_offset(&vs, "missing", h),
            Err(LayoutError::VariableNotFound { name: "missing".to_string() })
        );
    }

    #[test]
    fn layout_matches_free_functions(vs in variables(24), h in hypotheses()) {
        let layout = VariableLayout::new(&vs, h).unwrap();
        prop_assert_eq!(layout.len(), vs.len());
        prop_assert_eq!(layout.array_size(), get_array_size(&vs, h));
        for v in &vs {
            prop_assert_eq!(layout.offset(v.name()), get_variable_offset(&vs, v.name(), h));
            prop_assert_eq!(layout.size(v.name()), Ok(get_variable_size(v, h)));
        }
    }

    #[test]
    fn views_tile_the_buffer(vs in variables(12), h in hypotheses(), n in 1usize..4) {
        prop_assume!(!vs.is_empty());
        let layout = VariableLayout::new(&vs, h).unwrap();
        let buffer: Vec<f64> = (0..n * layout.array_size()).map(|i| i as f64).collect();
        prop_assert_eq!(layout.n_integration_points(buffer.len()), Ok(n));
        let mut seen = Vec::new();
        for ip in 0..n {
            for (name, _, _) in layout.entries() {
                let view = layout.view(&buffer, name, ip).unwrap();
                seen.extend(view.iter().copied());
            }
        }
        prop_assert_eq!(seen, buffer);
    }
}

#[test]
fn repeated_and_concurrent_calls_agree() {
    let vs = vec![
        Variable::stensor("eto").unwrap(),
        Variable::tensor("F").unwrap(),
        Variable::scalar("p").unwrap(),
        Variable::stensor("sig").unwrap(),
    ];
    let layout = VariableLayout::new(&vs, Hypothesis::GeneralisedPlaneStrain).unwrap();
    let expected: Vec<usize> = Hypothesis::iter()
        .map(|h| get_variable_offset(&vs, "sig", h).unwrap())
        .collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    let offsets: Vec<usize> = Hypothesis::iter()
                        .map(|h| get_variable_offset(&vs, "sig", h).unwrap())
                        .collect();
                    (offsets, layout.offset("sig").unwrap(), layout.array_size())
                })
            })
            .collect();
        for handle in handles {
            let (offsets, offset, size) = handle.join().unwrap();
            assert_eq!(offsets, expected);
            assert_eq!(offset, 10);
            assert_eq!(size, 14);
        }
    });
}

#[test]
fn unsupported_hypothesis_stops_before_any_computation() {
    let vs = vec![Variable::stensor("eto").unwrap()];
    let result = Hypothesis::from_name("OneAndAHalfDimensional")
        .map(|h| get_array_size(&vs, h));
    assert_eq!(
        result,
        Err(LayoutError::UnsupportedHypothesis {
            value: "OneAndAHalfDimensional".to_string()
        })
    );
    let result = Hypothesis::try_from(42_i32)
        .and_then(|h| get_variable_offset(&vs, "eto", h));
    assert!(matches!(result, Err(LayoutError::UnsupportedHypothesis { .. })));
    let result = Hypothesis::try_from(42_i32).and_then(|h| VariableLayout::new(&vs, h));
    assert!(matches!(result, Err(LayoutError::UnsupportedHypothesis { .. })));
}
