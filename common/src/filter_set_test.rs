use super::*;

#[test]
fn default_filter_set_matches_form_defaults() {
    let filters = FilterSet::default();
    assert_eq!(filters.keyword, "");
    assert_eq!(filters.category, Category::All);
    assert_eq!(filters.date_range, DateRange::All);
    assert_eq!(filters.status, Status::All);
    assert_eq!(filters.sort_by, SortBy::Latest);
    assert!(filters.is_default());
}

#[test]
fn serializes_with_camel_case_fields_and_lowercase_values() {
    let filters = FilterSet {
        keyword: "laptop".into(),
        category: Category::Electronics,
        date_range: DateRange::All,
        status: Status::Active,
        sort_by: SortBy::Latest,
    };
    let value = serde_json::to_value(&filters).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "keyword": "laptop",
            "category": "electronics",
            "dateRange": "all",
            "status": "active",
            "sortBy": "latest",
        })
    );
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let filters: FilterSet = serde_json::from_str(r#"{"keyword":"phone"}"#).unwrap();
    assert_eq!(filters, FilterSet::default().merged(FilterPatch::default().keyword("phone")));
}

#[test]
fn unknown_enum_value_is_rejected() {
    let result = serde_json::from_str::<FilterSet>(r#"{"category":"toys"}"#);
    assert!(result.is_err());
}

#[test]
fn patch_changes_only_supplied_fields() {
    let filters = FilterSet::default().merged(FilterPatch::default().keyword("phone"));
    assert_eq!(filters.keyword, "phone");
    assert_eq!(filters.category, Category::All);
    assert_eq!(filters.sort_by, SortBy::Latest);
    assert!(!filters.is_default());
}

#[test]
fn patch_back_to_default_values_yields_default_set() {
    let mut filters = FilterSet::default().merged(FilterPatch::default().status(Status::Pending));
    filters.apply(FilterPatch::default().status(Status::All));
    assert!(filters.is_default());
}

#[test]
fn patch_from_field_parses_form_values() {
    let patch = FilterPatch::from_field(FilterField::DateRange, "week").unwrap();
    assert_eq!(patch, FilterPatch::default().date_range(DateRange::Week));

    let patch = FilterPatch::from_field(FilterField::Keyword, "books about rust").unwrap();
    assert_eq!(patch.keyword.as_deref(), Some("books about rust"));

    let err = FilterPatch::from_field(FilterField::SortBy, "price").unwrap_err();
    assert_eq!(err.field, "SortBy");
    assert_eq!(err.value, "price");
}

#[test]
fn patch_serialization_skips_absent_fields() {
    let patch = FilterPatch::default().category(Category::Books);
    assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"category":"books"}"#);
}

#[test]
fn enum_string_round_trip_covers_all_variants() {
    for sort in SortBy::ALL {
        assert_eq!(sort.as_str().parse::<SortBy>().unwrap(), *sort);
    }
    assert_eq!(Category::ALL.len(), 4);
    assert_eq!(DateRange::ALL.len(), 5);
    assert_eq!(Status::ALL.len(), 4);
}
