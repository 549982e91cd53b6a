//! Fixed GraphQL documents sent by the services.
//!
//! Queries take no variables. Each one asks for exactly the nested shape the
//! matching mapper needs.

pub const EVENTS_QUERY: &str = r#"query Events {
  events {
    data {
      id
      title
      tags {
        id
        value
      }
      talks {
        id
        title
      }
      location {
        id
        title
      }
      images
      communities {
        id
        title
        members_quantity
      }
    }
  }
}"#;

pub const COMMUNITIES_QUERY: &str = r#"query Communities {
  communities {
    data {
      id
      title
      images
      members_quantity
      short_description
      tags {
        id
        value
      }
    }
  }
}"#;
