use twb_catalog::catalog::{Role, build_usage_map};
use twb_catalog::xml::parse_document;

use crate::helpers::workbook_fixtures::{SUPERSTORE_TWB, workbook_xml, worksheet_xml};

fn usage_for(worksheets: &str) -> twb_catalog::UsageMap {
    let xml = workbook_xml("", worksheets);
    let root = parse_document(xml.as_bytes()).unwrap();
    build_usage_map(&root)
}

#[test]
fn test_rows_with_aggregation_grouping() {
    let usage = usage_for(&worksheet_xml("Sheet1", "(sum(Sales))/[Region]", ""));

    assert!(usage.roles("[Sales]", "Sheet1").unwrap().contains(&Role::Row));
    assert!(usage.roles("[Region]", "Sheet1").unwrap().contains(&Role::Row));
    assert_eq!(usage.len(), 2);
}

#[test]
fn test_columns_shelf_registers_column_role() {
    let usage = usage_for(&worksheet_xml("Sheet1", "", "[ds].[sum:Profit:qk]"));
    let roles = usage.roles("[ds].[Profit]", "Sheet1").unwrap();
    assert_eq!(roles.iter().copied().collect::<Vec<_>>(), vec![Role::Column]);
}

#[test]
fn test_repeated_reference_is_deduplicated() {
    let usage = usage_for(&worksheet_xml(
        "Sheet1",
        "[none:Sales:nk]/[sum:Sales:qk]/[Sales]",
        "",
    ));
    assert_eq!(usage.roles("[Sales]", "Sheet1").unwrap().len(), 1);
}

#[test]
fn test_unnamed_worksheet_not_tracked() {
    let usage = usage_for("<worksheet><table><rows>[Sales]</rows></table></worksheet>");
    assert!(usage.is_empty());
}

#[test]
fn test_missing_shelves_contribute_nothing() {
    let usage = usage_for("<worksheet name='Blank'><table><view/></table></worksheet>");
    assert!(usage.is_empty());
}

#[test]
fn test_filters_and_slices_register_filter_role() {
    let worksheets = r#"
<worksheet name='Filtered'>
  <table>
    <view>
      <filter class='categorical' column='[ds].[none:Region:nk]' />
      <filter class='quantitative' />
      <slices>
        <column>[ds].[none:Segment:nk]</column>
        <column></column>
      </slices>
    </view>
    <rows />
    <cols />
  </table>
</worksheet>"#;
    let usage = usage_for(worksheets);

    assert_eq!(
        usage.roles("[ds].[Region]", "Filtered").unwrap().iter().copied().collect::<Vec<_>>(),
        vec![Role::Filter]
    );
    assert_eq!(
        usage.roles("[ds].[Segment]", "Filtered").unwrap().iter().copied().collect::<Vec<_>>(),
        vec![Role::Filter]
    );
    assert_eq!(usage.len(), 2);
}

#[test]
fn test_superstore_usage() {
    let root = parse_document(SUPERSTORE_TWB.as_bytes()).unwrap();
    let usage = build_usage_map(&root);

    let region = usage.get("[federated.0a1b2c].[Region]").unwrap();
    let roles: Vec<_> = region["Sales by Region"].iter().copied().collect();
    assert_eq!(roles, vec![Role::Filter, Role::Row]);

    let sales = usage.get("[federated.0a1b2c].[Sales]").unwrap();
    let sheets: Vec<_> = sales.keys().map(String::as_str).collect();
    assert_eq!(sheets, vec!["Sales by Region", "Profitability"]);
    assert!(sales["Sales by Region"].contains(&Role::Column));
    assert!(sales["Profitability"].contains(&Role::Row));
}
