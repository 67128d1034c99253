//! End-to-end tests for Table rendering.
//!
//! Tables combine every part of the engine: width resolution, wrapping,
//! compaction, cell alignment, frame assembly and the render cache.
//!
//! Run with: RUST_LOG=debug cargo test --test e2e_table -- --nocapture

mod common;

use common::assertions::{assert_err_logged, assert_grid_eq, assert_ok_logged, assert_rectangular};
use common::init_test_logging;
use framegrid::prelude::*;

fn fixed(header: &str, width: usize) -> Column {
    Column::new(header).width(Width::Fixed(width))
}

// =============================================================================
// Scenario 1: Fixed columns with short rows
// =============================================================================

#[test]
fn e2e_table_fixed_columns_short_rows() {
    init_test_logging();
    tracing::info!("Starting E2E fixed columns test");

    let table = Table::new()
        .with_column(fixed("Col1", 4))
        .with_column(fixed("Col2", 4).alignment(Alignment::TopRight))
        .with_column(fixed("Col3", 4))
        .with_row(["A"])
        .with_row(["B", "C"])
        .with_row(["D", "E", "F"]);

    let output = assert_ok_logged("render", table.render_with(&ASCII, FrameOptions::ALL, None));
    tracing::debug!(output = %output, "Rendered table");

    assert_grid_eq(
        "fixed columns",
        &output,
        "\
+----+----+----+
|Col1|Col2|Col3|
+----+----+----+
|A   |    |    |
+----+----+----+
|B   |   C|    |
+----+----+----+
|D   |   E|F   |
+----+----+----+
",
    );
    assert_rectangular("fixed columns", &output);

    tracing::info!("E2E fixed columns test PASSED");
}

// =============================================================================
// Scenario 2: Word wrapping inside a cell
// =============================================================================

#[test]
fn e2e_table_word_wrap_cell() {
    init_test_logging();

    let table = Table::new()
        .with_column(Column::unnamed().width(Width::Fixed(12)))
        .with_row(["Quick brown fox jumps over the lazy dog"]);

    let output = assert_ok_logged("render", table.render_with(&ASCII, FrameOptions::NONE, None));
    assert_grid_eq(
        "word wrap",
        &output,
        "Quick       \nbrown fox   \njumps over  \nthe lazy dog\n",
    );
}

// =============================================================================
// Scenario 3: Degenerate tables
// =============================================================================

#[test]
fn e2e_table_empty_renders_empty_string() {
    init_test_logging();

    let table = Table::new();
    let output = assert_ok_logged("render", table.render_with(&ASCII, FrameOptions::NONE, None));
    assert_eq!(output, "");
}

#[test]
fn e2e_table_all_hidden_with_title() {
    init_test_logging();

    let table = Table::new()
        .title("Report")
        .with_column(Column::new("a").width(Width::Hidden))
        .with_column(Column::new("b").width(Width::Hidden))
        .with_row(["1", "2"]);

    let output = assert_ok_logged("render", table.render_with(&SINGLE, FrameOptions::ALL, None));
    assert_grid_eq("title only", &output, "┌──────┐\n│Report│\n└──────┘\n");
}

#[test]
fn e2e_table_title_over_empty_auto_column() {
    init_test_logging();

    let table = Table::new()
        .title("Inventory")
        .with_column(Column::unnamed());
    assert_eq!(table.column_widths(), &[Some(9)]);

    let output = assert_ok_logged("render", table.render_with(&ASCII, FrameOptions::ALL, None));
    assert_grid_eq("empty auto", &output, "+---------+\n|Inventory|\n+---------+\n");

    let collapsed = Table::new()
        .title("Inventory")
        .with_column(Column::unnamed().width(Width::Collapsed));
    let output = assert_ok_logged("render", collapsed.render_with(&ASCII, FrameOptions::ALL, None));
    assert_grid_eq("collapsed", &output, "+---------+\n|Inventory|\n+---------+\n");
}

#[test]
fn e2e_table_columns_without_rows() {
    init_test_logging();

    let table = Table::new()
        .with_column(Column::unnamed().width(Width::Fixed(2)))
        .with_column(Column::unnamed().width(Width::Fixed(1)));
    let output = assert_ok_logged("render", table.render());
    assert_grid_eq("empty box", &output, "+--+-+\n+--+-+\n");
}

// =============================================================================
// Scenario 4: Width policies
// =============================================================================

#[test]
fn e2e_table_width_policies() {
    init_test_logging();

    let table = Table::new()
        .with_column(Column::unnamed().width(Width::Min(6)))
        .with_column(Column::unnamed().width(Width::Max(3)).wrapping(Wrapping::Cut))
        .with_column(Column::unnamed().width(Width::range(2..4)))
        .with_column(Column::unnamed().width(Width::closed(2..=4)))
        .with_row(["ab", "abcdef", "x", "abcdefgh"]);

    assert_eq!(
        table.column_widths(),
        &[Some(6), Some(3), Some(2), Some(4)]
    );

    let output = assert_ok_logged(
        "render",
        table.render_with(&ASCII, FrameOptions::INSIDE_VERTICAL, None),
    );
    assert_grid_eq("policies", &output, "ab    |a…f|x |abcd\n      |   |  |efgh\n");
    assert_rectangular("policies", &output);
}

#[test]
fn e2e_table_hidden_and_collapsed() {
    init_test_logging();

    let table = Table::new()
        .with_column(Column::new("A"))
        .with_column(Column::new("secret").width(Width::Hidden))
        .with_column(Column::new("").width(Width::Collapsed))
        .with_column(Column::new("B"))
        .with_row(["1", "s", "gone", "2"]);

    let output = assert_ok_logged("render", table.render());
    assert_grid_eq("hidden vs collapsed", &output, "+-++-+\n|A||B|\n+-++-+\n|1||2|\n+-++-+\n");
}

// =============================================================================
// Scenario 5: Frame options and styles
// =============================================================================

#[test]
fn e2e_table_options_are_independent() {
    init_test_logging();

    let table = Table::new()
        .with_column(Column::new("k"))
        .with_column(Column::new("v"))
        .with_rows([["a", "1"], ["b", "2"]]);

    let cases = [
        (FrameOptions::NONE, "kv\na1\nb2\n"),
        (FrameOptions::TOP | FrameOptions::BOTTOM, "--\nkv\na1\nb2\n--\n"),
        (FrameOptions::LEFT | FrameOptions::RIGHT, "|kv|\n|a1|\n|b2|\n"),
        (FrameOptions::INSIDE_VERTICAL, "k|v\na|1\nb|2\n"),
        (FrameOptions::INSIDE_HORIZONTAL, "kv\n--\na1\n--\nb2\n"),
        (FrameOptions::LEFT, "|kv\n|a1\n|b2\n"),
    ];
    for (options, expected) in cases {
        let output = assert_ok_logged("render", table.render_with(&ASCII, options, None));
        assert_grid_eq(&format!("{options:?}"), &output, expected);
    }
}

#[test]
fn e2e_table_every_preset_is_rectangular() {
    init_test_logging();

    let table = Table::new()
        .title(Txt::new("Presets").align(Alignment::TopCenter))
        .with_column(Column::new("Name"))
        .with_column(Column::new("Notes").width(Width::Fixed(8)))
        .with_row(["ascii", "plain and portable"])
        .with_row(["padded", "roomy"]);

    for name in framegrid::frame::STYLE_NAMES {
        let style = get_style(name).expect("preset");
        let output = assert_ok_logged(name, table.render_with(style, FrameOptions::ALL, None));
        tracing::debug!(style = name, output = %output, "Rendered preset");
        assert_rectangular(name, &output);
    }
}

#[test]
fn e2e_table_custom_style() {
    init_test_logging();

    let style = assert_ok_logged(
        "custom style",
        FrameStyle::new([
            "#", "#", "#", "#", //
            "=", "-", ".", //
            "#", ":", "#", //
            "=", "+", "=", //
            "#", "#",
        ]),
    );
    let table = Table::new()
        .with_column(Column::new("a"))
        .with_column(Column::new("b"))
        .with_row(["1", "2"]);

    let output = assert_ok_logged("render", table.render_with(&style, FrameOptions::ALL, None));
    assert_grid_eq("custom", &output, "#===#\n#a:b#\n#-+-#\n#1:2#\n#===#\n");
}

// =============================================================================
// Scenario 6: Row ranges
// =============================================================================

#[test]
fn e2e_table_row_ranges() {
    init_test_logging();

    let table = Table::new()
        .with_column(Column::new("n"))
        .with_rows((0..6).map(|i| [i.to_string()]));

    let ranges = RowRanges::new([0..2, 4..6]);
    let output = assert_ok_logged(
        "render",
        table.render_with(&ASCII, FrameOptions::ALL, Some(&ranges)),
    );
    assert_grid_eq(
        "ranges",
        &output,
        "+-+\n|n|\n+-+\n|0|\n+-+\n|1|\n+~+\n|4|\n+-+\n|5|\n+-+\n",
    );

    // Without inside dividers the gap is not marked either.
    let output = assert_ok_logged(
        "render",
        table.render_with(&ASCII, FrameOptions::OUTSIDE, Some(&ranges)),
    );
    assert_grid_eq("ranges outside", &output, "+-+\n|n|\n|0|\n|1|\n|4|\n|5|\n+-+\n");

    let out_of_bounds = RowRanges::new([5..7]);
    let err = assert_err_logged(
        "out of bounds",
        table.render_with(&ASCII, FrameOptions::ALL, Some(&out_of_bounds)),
    );
    assert_eq!(err, RenderError::RangeOutOfBounds { range: 5..7, rows: 6 });
}

// =============================================================================
// Scenario 7: Multi-line content and alignment
// =============================================================================

#[test]
fn e2e_table_newlines_and_vertical_alignment() {
    init_test_logging();

    let table = Table::new()
        .with_column(Column::unnamed())
        .with_column(Column::unnamed().alignment(Alignment::MiddleCenter))
        .with_column(Column::unnamed().alignment(Alignment::BottomRight))
        .with_row([Txt::new("one\ntwo\nthree\nfour"), Txt::new("mid"), Txt::new("end")]);

    let options = FrameOptions::LEFT | FrameOptions::RIGHT | FrameOptions::INSIDE_VERTICAL;
    let output = assert_ok_logged("render", table.render_with(&ASCII, options, None));
    assert_grid_eq(
        "alignment",
        &output,
        "|one  |   |   |\n|two  |mid|   |\n|three|   |   |\n|four |   |end|\n",
    );
}

#[test]
fn e2e_table_trimming_and_fill() {
    init_test_logging();

    let table = Table::new()
        .with_column(
            Column::unnamed()
                .trimming(Trimming::ALL)
                .alignment(Alignment::TopCenter)
                .fill('.'),
        )
        .with_row(["\n\n   lots    of   space   \n\n"])
        .with_row(["x"]);

    let output = assert_ok_logged("render", table.render_with(&ASCII, FrameOptions::NONE, None));
    assert_grid_eq("trim and fill", &output, "lots of space\n......x......\n");
}

// =============================================================================
// Scenario 8: Cache transparency
// =============================================================================

#[test]
fn e2e_table_repetitive_columns_render_identically() {
    init_test_logging();

    let rows: Vec<[String; 2]> = (0..200)
        .map(|i| [format!("status {}", i % 3), format!("id-{i}")])
        .collect();

    let plain = Table::new()
        .with_column(Column::new("Status").width(Width::Fixed(6)))
        .with_column(Column::new("Id"))
        .with_rows(rows.clone());
    let cached = Table::new()
        .with_column(Column::new("Status").width(Width::Fixed(6)).repetitive())
        .with_column(Column::new("Id").repetitive())
        .with_rows(rows)
        .cache_capacity(2);

    let expected = assert_ok_logged("plain", plain.render());
    let actual = assert_ok_logged("cached", cached.render());
    assert_grid_eq("cache transparency", &actual, &expected);
}
