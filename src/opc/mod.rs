//! Open Packaging Conventions: the ZIP container DOCX files live in

mod content_types;
mod package;
mod part;
mod part_uri;
mod relationships;

pub use content_types::{ContentTypes, CORE_PROPERTIES, MAIN_DOCUMENT, RELATIONSHIPS, STYLES, XML};
pub use package::Package;
pub use part::Part;
pub use part_uri::{well_known, PartUri};
pub use relationships::{rel_types, Relationship, Relationships};
