pub mod city_card;
pub mod city_select;
pub mod date_bar;
pub mod leg_connector;
pub mod summary_popup;
