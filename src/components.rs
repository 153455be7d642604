//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the blog index and post pages. Each
//! component renders one piece of chrome (document shell, header, breadcrumb,
//! post card, footer) so pages only assemble them.

pub mod footer;
pub mod layout;
pub mod nav;
pub mod post_card;
