//! XSRC file reading

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use quick_xml::de::{from_reader as xml_from_reader, from_str as xml_from_str};

use super::document::XsrcDocument;
use crate::error::{Error, Result};

/// Read an XSRC file from disk
///
/// The file handle is held for the whole parse and dropped on every return
/// path, including parse failures.
///
/// # Errors
/// Returns [`Error::FileNotFound`] if the file cannot be opened and
/// [`Error::Parse`] if the content is not a valid XSRC document. Read
/// failures after the file is open are reported as [`Error::Parse`].
pub fn read_xsrc<P: AsRef<Path>>(path: P) -> Result<XsrcDocument> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let document: XsrcDocument = xml_from_reader(BufReader::new(file))?;
    tracing::debug!("Read {} entity records from {}", document.len(), path.display());

    Ok(document)
}

/// Parse XSRC from an XML string
///
/// # Errors
/// Returns [`Error::Parse`] if the XML is malformed or a record is missing a
/// required attribute.
pub fn parse_xsrc(content: &str) -> Result<XsrcDocument> {
    Ok(xml_from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::formats::xsrc::EntityAttribute;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <entity ref="global">
    <attribute publicName="LearnerCount" type="number"/>
  </entity>
  <entity id="learner" containmentParentId="global" publicId="Learner">
    <attribute publicName="LearnRefNumber" type="text"/>
    <attribute publicName="DateOfBirth" type="date"/>
  </entity>
</root>"#;

    #[test]
    fn test_parse_records_in_order() {
        let doc = parse_xsrc(SAMPLE).unwrap();
        assert_eq!(doc.len(), 2);

        let ids: Vec<Option<&str>> = doc.records().map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec![None, Some("learner")]);

        let learner = &doc.entities[1];
        assert_eq!(learner.containment_parent_id.as_deref(), Some("global"));
        assert_eq!(learner.public_id.as_deref(), Some("Learner"));
        assert_eq!(
            learner.attributes,
            vec![
                EntityAttribute::new("LearnRefNumber", "text"),
                EntityAttribute::new("DateOfBirth", "date"),
            ]
        );
    }

    #[test]
    fn test_parse_global_record() {
        let doc = parse_xsrc(SAMPLE).unwrap();
        let globals: Vec<_> = doc.global_records().collect();
        assert_eq!(globals.len(), 1);
        assert!(globals[0].id.is_none());
        assert!(globals[0].containment_parent_id.is_none());
    }

    #[test]
    fn test_parse_records_around_other_elements() {
        let xml = r#"<root>
  <entity ref="global"/>
  <relationship name="employment"/>
  <entity id="customer" containmentParentId="global" publicId="customer">
    <attribute publicName="CustomerAlive" type="boolean"/>
    <note>captured at onboarding</note>
    <attribute publicName="CustomerDOB" type="date"/>
  </entity>
  <relationship name="ownership"/>
  <entity id="employer" containmentParentId="customer" publicId="employer"/>
</root>"#;
        let doc = parse_xsrc(xml).unwrap();

        let ids: Vec<Option<&str>> = doc.records().map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec![None, Some("customer"), Some("employer")]);
        assert_eq!(
            doc.entities[1].attributes,
            vec![
                EntityAttribute::new("CustomerAlive", "boolean"),
                EntityAttribute::new("CustomerDOB", "date"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_root() {
        let doc = parse_xsrc("<root/>").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_malformed_xml() {
        let result = parse_xsrc("<root><entity ref=\"global\"></root>");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_attribute_missing_type() {
        let xml = r#"<root><entity ref="global"><attribute publicName="X"/></entity></root>"#;
        assert!(matches!(parse_xsrc(xml), Err(Error::Parse(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.xsrc");

        match read_xsrc(&path) {
            Err(Error::FileNotFound { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_read_directory_is_parse_error() {
        // Opening a directory succeeds on unix; the failure comes from reading it.
        let temp = TempDir::new().unwrap();
        assert!(matches!(read_xsrc(temp.path()), Err(Error::Parse(_))));
    }

    #[test]
    fn test_read_matches_parse() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Inputs.xsrc");
        fs::write(&path, SAMPLE).unwrap();

        assert_eq!(read_xsrc(&path).unwrap(), parse_xsrc(SAMPLE).unwrap());
    }
}
