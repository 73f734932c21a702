pub mod flash_banner;
pub mod page_header;
pub mod stat_card;
