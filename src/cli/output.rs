use crate::cli::Report;
use comfy_table::presets::NOTHING;
use comfy_table::*;
use regionfilter::Match;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Matches
--------------------------------------------------------------------------------------*/

pub fn matches(matches: &[Match]) {
    for ip_match in matches {
        println!("{ip_match}");
    }
}

/*--------------------------------------------------------------------------------------
  Summary
--------------------------------------------------------------------------------------*/

pub fn summary(report: &Report) {
    println!("{}", summary_table(report));
}

fn summary_table(report: &Report) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(report.aws_range_count),
        Cell::new(format!("AWS IP Prefixes ({})", report.region)),
    ]);
    table.add_row(vec![
        Cell::new(report.source_ip_count),
        Cell::new("Source IPs"),
    ]);
    table.add_row(vec![
        Cell::new(report.matches.len()).add_attribute(Attribute::Bold),
        Cell::new("Matching IPs").add_attribute(Attribute::Bold),
    ]);

    let numbers_column = table.column_mut(0).expect("The first column exists");
    numbers_column.set_cell_alignment(CellAlignment::Right);

    table
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
