use gridmatch_engine::{
    lookup, match_position, ArgValue, ErrorKind, LookupOptions, MatchMode, ScalarValue, SearchMode,
};
use pretty_assertions::assert_eq;

fn num(n: f64) -> ScalarValue {
    ScalarValue::Number(n)
}

fn text(s: &str) -> ScalarValue {
    ScalarValue::Text(s.to_string())
}

/// Viscosity/temperature measurements keyed by density, header row included.
fn density_grid() -> Vec<Vec<ScalarValue>> {
    let mut grid = vec![vec![
        text("Density"),
        text("Viscosity"),
        text("Temperature"),
    ]];
    for (density, viscosity, temperature) in [
        (0.457, 3.55, 500.0),
        (0.525, 3.25, 400.0),
        (0.616, 2.93, 300.0),
        (0.675, 2.75, 250.0),
        (0.746, 2.57, 200.0),
        (0.835, 2.38, 150.0),
        (0.946, 2.17, 100.0),
        (1.09, 1.95, 50.0),
        (1.29, 1.71, 0.0),
    ] {
        grid.push(vec![num(density), num(viscosity), num(temperature)]);
    }
    grid
}

fn grid_columns(grid: &[Vec<ScalarValue>], cols: std::ops::RangeInclusive<usize>) -> ArgValue {
    ArgValue::Array(grid.iter().map(|row| row[cols.clone()].to_vec()).collect())
}

#[test]
fn exact_lookup_projects_the_matching_temperature() {
    let grid = density_grid();
    assert_eq!(
        lookup(
            &num(0.525),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 2..=2),
            &LookupOptions::default(),
        ),
        Ok(num(400.0))
    );
}

#[test]
fn multi_column_results_join_in_column_order() {
    let grid = density_grid();
    assert_eq!(
        lookup(
            &num(0.525),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 1..=2),
            &LookupOptions::default(),
        ),
        Ok(text("3.25, 400"))
    );
}

#[test]
fn text_headers_never_match_numeric_lookups() {
    let grid = density_grid();
    assert_eq!(
        lookup(
            &num(0.457),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 2..=2),
            &LookupOptions::default(),
        ),
        Ok(num(500.0))
    );
}

#[test]
fn missing_value_without_fallback_is_not_available() {
    let grid = density_grid();
    assert_eq!(
        lookup(
            &text("HELLO WORLD"),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 2..=2),
            &LookupOptions::default(),
        ),
        Err(ErrorKind::NotAvailable)
    );
}

#[test]
fn missing_value_returns_the_fallback() {
    let grid = density_grid();
    let options = LookupOptions {
        if_not_found: Some(text("fdnsfidnufindufindsf")),
        ..LookupOptions::default()
    };
    assert_eq!(
        lookup(
            &text("HELLO WORLD"),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 2..=2),
            &options,
        ),
        Ok(text("fdnsfidnufindufindsf"))
    );
}

#[test]
fn next_smaller_finds_the_nearest_density_below() {
    let grid = density_grid();
    let options = LookupOptions {
        match_mode: MatchMode::try_from(-1).unwrap(),
        ..LookupOptions::default()
    };
    assert_eq!(
        lookup(
            &num(0.7),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 2..=2),
            &options,
        ),
        Ok(num(250.0))
    );
}

#[test]
fn next_smaller_below_the_whole_range_uses_the_fallback() {
    let grid = density_grid();
    let options = LookupOptions {
        match_mode: MatchMode::ExactOrNextSmaller,
        if_not_found: Some(text("out of range")),
        ..LookupOptions::default()
    };
    assert_eq!(
        lookup(
            &num(0.2),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 2..=2),
            &options,
        ),
        Ok(text("out of range"))
    );
}

#[test]
fn next_larger_finds_the_nearest_density_above() {
    let grid = density_grid();
    let options = LookupOptions {
        match_mode: MatchMode::try_from(1).unwrap(),
        ..LookupOptions::default()
    };
    assert_eq!(
        lookup(
            &num(0.7),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 2..=2),
            &options,
        ),
        Ok(num(200.0))
    );

    let capped = LookupOptions {
        match_mode: MatchMode::ExactOrNextLarger,
        if_not_found: Some(text("out of range")),
        ..LookupOptions::default()
    };
    assert_eq!(
        lookup(
            &num(1.5),
            &grid_columns(&grid, 0..=0),
            &grid_columns(&grid, 2..=2),
            &capped,
        ),
        Ok(text("out of range"))
    );
}

#[test]
fn header_row_lookup_projects_from_the_aligned_column() {
    let grid = density_grid();
    let header = ArgValue::Array(vec![grid[0].clone()]);
    let first_data_row = ArgValue::Array(vec![grid[1].clone()]);
    assert_eq!(
        lookup(
            &text("Density"),
            &header,
            &first_data_row,
            &LookupOptions::default(),
        ),
        Ok(num(0.457))
    );
}

#[test]
fn a_whole_grid_looks_up_by_its_first_column() {
    let colors = ArgValue::Array(vec![
        vec![text("Red"), num(4.14)],
        vec![text("Orange"), num(4.19)],
        vec![text("Yellow"), num(5.17)],
        vec![text("Green"), num(5.77)],
        vec![text("Blue"), num(6.39)],
    ]);
    let prices = ArgValue::column([num(4.14), num(4.19), num(5.17), num(5.77), num(6.39)]);
    assert_eq!(
        lookup(&text("ORANGE"), &colors, &prices, &LookupOptions::default()),
        Ok(num(4.19))
    );
}

#[test]
fn mismatched_return_length_is_a_ref_error() {
    let grid = density_grid();
    let lookup_column = grid_columns(&grid, 0..=0);
    let truncated = ArgValue::Array(
        grid[..grid.len() - 1]
            .iter()
            .map(|row| vec![row[2].clone()])
            .collect(),
    );
    assert_eq!(
        lookup(
            &num(0.525),
            &lookup_column,
            &truncated,
            &LookupOptions::default(),
        ),
        Err(ErrorKind::Ref)
    );

    // The error class does not depend on the requested modes.
    let options = LookupOptions {
        match_mode: MatchMode::ExactOrNextSmaller,
        search_mode: SearchMode::LastToFirst,
        if_not_found: Some(text("unused")),
    };
    assert_eq!(
        lookup(&num(0.525), &lookup_column, &truncated, &options),
        Err(ErrorKind::Ref)
    );
}

#[test]
fn scalar_arguments_are_ref_errors() {
    let grid = density_grid();
    let column = grid_columns(&grid, 0..=0);
    let scalar = ArgValue::Scalar(num(0.525));
    assert_eq!(
        lookup(&num(0.525), &scalar, &column, &LookupOptions::default()),
        Err(ErrorKind::Ref)
    );
    assert_eq!(
        lookup(&num(0.525), &column, &scalar, &LookupOptions::default()),
        Err(ErrorKind::Ref)
    );
}

#[test]
fn match_position_counts_the_header_row() {
    let grid = density_grid();
    assert_eq!(
        match_position(
            &num(0.525),
            &grid_columns(&grid, 0..=0),
            MatchMode::Exact,
            SearchMode::FirstToLast,
        ),
        Ok(2)
    );
    assert_eq!(
        match_position(
            &text("Viscosity"),
            &ArgValue::Array(vec![grid[0].clone()]),
            MatchMode::Exact,
            SearchMode::FirstToLast,
        ),
        Ok(1)
    );
}

#[test]
fn error_cells_are_skipped_not_propagated() {
    let lookup_column = ArgValue::column([
        num(1.0),
        ScalarValue::Error(ErrorKind::Div0),
        num(3.0),
    ]);
    let letters = ArgValue::column([text("a"), text("b"), text("c")]);
    assert_eq!(
        lookup(&num(3.0), &lookup_column, &letters, &LookupOptions::default()),
        Ok(text("c"))
    );
    // A textual lookup can still hit the error cell through its token.
    assert_eq!(
        lookup(
            &text("#DIV/0!"),
            &lookup_column,
            &letters,
            &LookupOptions::default(),
        ),
        Ok(text("b"))
    );
}
