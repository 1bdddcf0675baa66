//! End-to-end generation checks over the built-in rule sets

use wavegrid::GenerationError;
use wavegrid::rules::presets;
use wavegrid::solver::{GenerateOptions, generate};
use wavegrid::spatial::direction;

#[test]
fn test_same_seed_reproduces_the_same_grid() {
    let preset = presets::sparse_islands::<2>().unwrap_or_else(|_| unreachable!());
    let options = GenerateOptions::new([8, 8], false, 7, 20);

    let first = generate(&preset.patterns, &preset.table, &options);
    let second = generate(&preset.patterns, &preset.table, &options);
    assert!(first.is_ok());
    assert_eq!(first.ok(), second.ok());
}

#[test]
fn test_checkerboard_alternates_on_an_even_torus() {
    let preset = presets::checkerboard::<2>().unwrap_or_else(|_| unreachable!());
    let options = GenerateOptions::new([4, 6], true, 11, 20);

    let grid =
        generate(&preset.patterns, &preset.table, &options).unwrap_or_else(|_| unreachable!());
    let cells: Vec<usize> = grid.values().copied().collect();
    let layout = *grid.layout();
    for (index, &pattern) in cells.iter().enumerate() {
        for dir in 0..direction::count::<2>() {
            let neighbor = layout
                .neighbor(index, dir, true)
                .and_then(|n| cells.get(n).copied());
            assert_eq!(neighbor, Some(1 - pattern));
        }
    }
}

#[test]
fn test_islands_never_touch_even_across_the_wrap() {
    let preset = presets::sparse_islands::<2>().unwrap_or_else(|_| unreachable!());
    for seed in 0..1000 {
        let options = GenerateOptions::new([3, 3], true, seed, 20);
        let grid =
            generate(&preset.patterns, &preset.table, &options).unwrap_or_else(|_| unreachable!());
        let cells: Vec<usize> = grid.values().copied().collect();
        let layout = *grid.layout();
        for (index, &pattern) in cells.iter().enumerate() {
            if pattern != 1 {
                continue;
            }
            for dir in 0..direction::count::<2>() {
                let neighbor = layout
                    .neighbor(index, dir, true)
                    .and_then(|n| cells.get(n).copied());
                assert_eq!(neighbor, Some(0), "island touches island at seed {seed}");
            }
        }
    }
}

#[test]
fn test_seeded_cells_survive_into_the_output() {
    let preset = presets::sparse_islands::<2>().unwrap_or_else(|_| unreachable!());
    let mut options = GenerateOptions::new([5, 5], false, 3, 20);
    options.seeds = vec![([0, 0], 1), ([2, 2], 1), ([4, 4], 1)];

    let grid =
        generate(&preset.patterns, &preset.table, &options).unwrap_or_else(|_| unreachable!());
    assert_eq!(grid.get([0, 0]), Some(&1));
    assert_eq!(grid.get([2, 2]), Some(&1));
    assert_eq!(grid.get([4, 4]), Some(&1));
    // propagation pushed background around every seeded island
    assert_eq!(grid.get([0, 1]), Some(&0));
    assert_eq!(grid.get([1, 2]), Some(&0));
}

#[test]
fn test_unsatisfiable_requests_fail_instead_of_emitting_a_grid() {
    // strict alternation cannot two-colour an odd wrap cycle
    let preset = presets::checkerboard::<2>().unwrap_or_else(|_| unreachable!());
    let options = GenerateOptions::new([3, 3], true, 0, 5);

    assert!(matches!(
        generate(&preset.patterns, &preset.table, &options),
        Err(GenerationError::AttemptsExhausted { attempts: 5 })
    ));
}

#[test]
fn test_strata_bands_confine_rock_and_air() {
    let layers = 6;
    let preset = presets::strata(layers).unwrap_or_else(|_| unreachable!());
    let mut options = GenerateOptions::new([layers, 4, 4], false, 21, 20);
    options.bands.clone_from(&preset.bands);

    let grid =
        generate(&preset.patterns, &preset.table, &options).unwrap_or_else(|_| unreachable!());
    let layout = *grid.layout();
    for (index, &pattern) in grid.values().enumerate() {
        let [layer, _, _] = layout.coords_of(index);
        match pattern {
            0 => assert!(layer <= layers / 2, "rock above its band at layer {layer}"),
            2 => assert!(layer >= layers / 2, "air below its band at layer {layer}"),
            _ => {}
        }
    }
}

#[test]
fn test_three_dimensional_generation_is_deterministic() {
    let preset = presets::sparse_islands::<3>().unwrap_or_else(|_| unreachable!());
    let options = GenerateOptions::new([3, 4, 4], true, 13, 20);

    let first = generate(&preset.patterns, &preset.table, &options);
    let second = generate(&preset.patterns, &preset.table, &options);
    assert!(first.is_ok());
    assert_eq!(first.ok(), second.ok());
}
