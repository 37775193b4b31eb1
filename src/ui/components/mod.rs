pub mod address_search;
pub mod kpi_card;
pub mod map_frame;
pub mod marketing;
pub mod toast;
pub mod verdict_banner;
