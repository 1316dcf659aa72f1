//! Tab groups on server-rendered pages
//!
//! Содержит:
//! - `dom` - `TabSurface` поверх элементов страницы
//! - `group` - смонтированная группа: контроллер + обработчики событий
//! - `page` - поиск групп на странице и автоматический монтаж

pub mod dom;
pub mod group;
pub mod page;

pub use group::TabGroup;
pub use page::{auto_mount, mount_document, mount_groups};
