pub mod search_form;
pub mod search_result_item_card;
pub mod search_results_view;
