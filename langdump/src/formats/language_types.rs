//! Support for the `LanguageTypes.xml` language declaration document.
//!
//! The document looks like:
//!
//! ```xml
//! <LanguageTypes>
//!     <LanguageType LanguageName="Template"><LanguageID>0</LanguageID></LanguageType>
//!     <LanguageType LanguageName="English"><LanguageID>1</LanguageID></LanguageType>
//! </LanguageTypes>
//! ```
//!
//! Only the document structure is validated here. Per-declaration problems
//! (missing names, bad ids, duplicates) are left to the registry.

use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use quick_xml::{Reader, events::Event};

use crate::{error::Error, traits::Parser, types::LanguageDeclaration};

const ROOT_ELEMENT: &[u8] = b"LanguageTypes";
const LANGUAGE_ELEMENT: &[u8] = b"LanguageType";
const NAME_ATTRIBUTE: &str = "LanguageName";
const ID_ELEMENT: &[u8] = b"LanguageID";

/// Every `LanguageType` declaration in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageTypes {
    pub declarations: Vec<LanguageDeclaration>,
}

impl LanguageTypes {
    pub fn into_declarations(self) -> Vec<LanguageDeclaration> {
        self.declarations
    }
}

impl Parser for LanguageTypes {
    type Error = Error;

    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut saw_root = false;
        let mut declarations = Vec::new();
        let mut current: Option<LanguageDeclaration> = None;
        // Text of the `LanguageID` element being read, if inside one.
        let mut id_text: Option<String> = None;

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    depth += 1;
                    match depth {
                        1 => {
                            check_single_root(saw_root)?;
                            check_root(e.name().as_ref())?;
                            saw_root = true;
                        }
                        2 if e.name().as_ref() == LANGUAGE_ELEMENT => {
                            current = Some(LanguageDeclaration {
                                name: read_name(e)?,
                                id: None,
                            });
                        }
                        3 if e.name().as_ref() == ID_ELEMENT => {
                            if current.as_ref().is_some_and(|c| c.id.is_none()) {
                                id_text = Some(String::new());
                            }
                        }
                        _ => {}
                    }
                }
                Event::Empty(ref e) => match depth {
                    0 => {
                        check_single_root(saw_root)?;
                        check_root(e.name().as_ref())?;
                        saw_root = true;
                    }
                    1 if e.name().as_ref() == LANGUAGE_ELEMENT => {
                        declarations.push(LanguageDeclaration {
                            name: read_name(e)?,
                            id: None,
                        });
                    }
                    2 if e.name().as_ref() == ID_ELEMENT => {
                        if let Some(decl) = current.as_mut() {
                            decl.id.get_or_insert_with(String::new);
                        }
                    }
                    _ => {}
                },
                Event::Text(ref t) => {
                    if let Some(text) = id_text.as_mut() {
                        text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(ref c) => {
                    if let Some(text) = id_text.as_mut() {
                        text.push_str(&String::from_utf8_lossy(c));
                    }
                }
                Event::End(_) => {
                    if depth == 3 {
                        if let (Some(decl), Some(text)) = (current.as_mut(), id_text.take()) {
                            decl.id = Some(text.trim().to_string());
                        }
                    } else if depth == 2 {
                        if let Some(decl) = current.take() {
                            declarations.push(decl);
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof if depth > 0 => {
                    return Err(Error::invalid_config(
                        "unexpected end of document inside an open element",
                    ));
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !saw_root {
            return Err(Error::invalid_config(
                "document has no `LanguageTypes` root element",
            ));
        }

        Ok(LanguageTypes { declarations })
    }

    /// Override default file reading to honour a UTF-8 or UTF-16 byte order mark.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding_rs::UTF_8))
            .bom_override(true)
            .build(file);
        Self::from_reader(BufReader::new(decoder))
    }
}

fn check_root(name: &[u8]) -> Result<(), Error> {
    if name == ROOT_ELEMENT {
        Ok(())
    } else {
        Err(Error::invalid_config(format!(
            "expected root element `LanguageTypes`, found `{}`",
            String::from_utf8_lossy(name)
        )))
    }
}

fn check_single_root(saw_root: bool) -> Result<(), Error> {
    if saw_root {
        Err(Error::invalid_config("document has multiple root elements"))
    } else {
        Ok(())
    }
}

fn read_name(e: &quick_xml::events::BytesStart) -> Result<Option<String>, Error> {
    match e.try_get_attribute(NAME_ATTRIBUTE)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_language_types() {
        let xml = indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <LanguageTypes>
                <LanguageType LanguageName="Template">
                    <LanguageID>0</LanguageID>
                </LanguageType>
                <LanguageType LanguageName="English">
                    <LanguageID>1</LanguageID>
                    <Culture>en-US</Culture>
                </LanguageType>
                <LanguageType LanguageName="French">
                    <LanguageID> 2 </LanguageID>
                </LanguageType>
            </LanguageTypes>
        "#};
        let types = LanguageTypes::from_str(xml).unwrap();
        assert_eq!(
            types.declarations,
            vec![
                LanguageDeclaration::new("Template", "0"),
                LanguageDeclaration::new("English", "1"),
                LanguageDeclaration::new("French", "2"),
            ]
        );
    }

    #[test]
    fn test_missing_name_and_id_are_preserved_as_none() {
        let xml = indoc! {r#"
            <LanguageTypes>
                <LanguageType><LanguageID>3</LanguageID></LanguageType>
                <LanguageType LanguageName="Klingon"></LanguageType>
                <LanguageType LanguageName="Elvish"/>
            </LanguageTypes>
        "#};
        let types = LanguageTypes::from_str(xml).unwrap();
        assert_eq!(
            types.declarations,
            vec![
                LanguageDeclaration {
                    name: None,
                    id: Some("3".to_string())
                },
                LanguageDeclaration {
                    name: Some("Klingon".to_string()),
                    id: None
                },
                LanguageDeclaration {
                    name: Some("Elvish".to_string()),
                    id: None
                },
            ]
        );
    }

    #[test]
    fn test_empty_id_element_is_kept_as_empty_string() {
        let xml = r#"<LanguageTypes><LanguageType LanguageName="X"><LanguageID/></LanguageType></LanguageTypes>"#;
        let types = LanguageTypes::from_str(xml).unwrap();
        assert_eq!(types.declarations[0].id.as_deref(), Some(""));
    }

    #[test]
    fn test_first_id_element_wins() {
        let xml = indoc! {r#"
            <LanguageTypes>
                <LanguageType LanguageName="English">
                    <LanguageID>1</LanguageID>
                    <LanguageID>9</LanguageID>
                </LanguageType>
            </LanguageTypes>
        "#};
        let types = LanguageTypes::from_str(xml).unwrap();
        assert_eq!(types.declarations[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn test_escaped_name_is_unescaped() {
        let xml = r#"<LanguageTypes><LanguageType LanguageName="Portugu&#234;s"><LanguageID>5</LanguageID></LanguageType></LanguageTypes>"#;
        let types = LanguageTypes::from_str(xml).unwrap();
        assert_eq!(types.declarations[0].name.as_deref(), Some("Português"));
    }

    #[test]
    fn test_wrong_root_is_fatal() {
        let xml = r#"<resources><string name="a">b</string></resources>"#;
        let err = LanguageTypes::from_str(xml).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("resources"));
    }

    #[test]
    fn test_empty_document_is_fatal() {
        let err = LanguageTypes::from_str("").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_xml_is_fatal() {
        let xml = "<LanguageTypes><LanguageType></Wrong></LanguageTypes>";
        let err = LanguageTypes::from_str(xml).unwrap_err();
        assert!(matches!(err, Error::XmlParse(_)));
    }

    #[test]
    fn test_truncated_document_is_fatal() {
        let xml = concat!(
            r#"<LanguageTypes><LanguageType LanguageName="English"><LanguageID>1</LanguageID></LanguageType>"#,
            r#"<LanguageType LanguageName="French"><LanguageID>2"#,
        );
        let err = LanguageTypes::from_str(xml).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("unexpected end of document"));
    }

    #[test]
    fn test_unclosed_root_is_fatal() {
        let err = LanguageTypes::from_str("<LanguageTypes>").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_multiple_roots_are_fatal() {
        let xml = concat!(
            r#"<LanguageTypes><LanguageType LanguageName="English"><LanguageID>1</LanguageID></LanguageType></LanguageTypes>"#,
            r#"<LanguageTypes><LanguageType LanguageName="French"><LanguageID>2</LanguageID></LanguageType></LanguageTypes>"#,
        );
        let err = LanguageTypes::from_str(xml).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("multiple root elements"));
    }

    #[test]
    fn test_second_empty_root_is_fatal() {
        let err = LanguageTypes::from_str("<LanguageTypes/><LanguageTypes/>").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_root_has_no_declarations() {
        let types = LanguageTypes::from_str("<LanguageTypes/>").unwrap();
        assert!(types.declarations.is_empty());
    }

    #[test]
    fn test_read_from_file_with_bom() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("LanguageTypes.xml");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(
            br#"<LanguageTypes><LanguageType LanguageName="English"><LanguageID>1</LanguageID></LanguageType></LanguageTypes>"#,
        );
        std::fs::write(&path, bytes).unwrap();

        let types = LanguageTypes::read_from(&path).unwrap();
        assert_eq!(
            types.declarations,
            vec![LanguageDeclaration::new("English", "1")]
        );
    }
}
