/// Default catalog document file name.
pub const CATALOG_FILE_NAME: &str = "messagesCatalog.xml";

/// Default schema document file name.
pub const SCHEMA_FILE_NAME: &str = "messagesCatalog.xsd";

/// Closing part of the catalog document, written after the last record.
pub const CATALOG_FOOTER: &str = "\n\n</messages>";

/// Schema of the catalog document.
pub const CATALOG_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" elementFormDefault="unqualified"
  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <xs:element name="messages">
    <xs:complexType>
      <xs:sequence>
        <xs:element maxOccurs="unbounded" name="message">
          <xs:complexType>
            <xs:simpleContent>
              <xs:extension base="xs:string">
                <xs:attribute name="code" use="required" type="xs:normalizedString"/>
                <xs:attribute name="level" use="required" type="xs:token"/>
                <xs:attribute name="module" type="xs:normalizedString"/>
                <xs:attribute name="line" type="xs:integer"/>
                <xs:attribute name="args" type="xs:NMTOKENS"/>
              </xs:extension>
            </xs:simpleContent>
          </xs:complexType>
        </xs:element>
      </xs:sequence>
      <xs:attribute name="variablePrefix" type="xs:string"/>
      <xs:attribute name="variableSuffix" type="xs:string"/>
      <xs:attribute name="variablePrefixEscape" type="xs:string"/>
    </xs:complexType>
  </xs:element>
</xs:schema>
"#;

/// Fixed text and file names of the catalog outputs.
///
/// Handed to the emitter explicitly so rendering can be exercised with any
/// template; [`CatalogTemplate::default`] is what the CLI writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTemplate {
    /// Everything before the first record.
    pub header: String,
    /// Everything after the last record.
    pub footer: String,
    /// The schema document, written verbatim.
    pub schema: String,
    pub catalog_file_name: String,
    pub schema_file_name: String,
}

impl CatalogTemplate {
    /// Template whose header points at `schema_file_name`.
    pub fn new(catalog_file_name: &str, schema_file_name: &str) -> Self {
        Self {
            header: catalog_header(schema_file_name),
            footer: CATALOG_FOOTER.to_string(),
            schema: CATALOG_SCHEMA.to_string(),
            catalog_file_name: catalog_file_name.to_string(),
            schema_file_name: schema_file_name.to_string(),
        }
    }
}

impl Default for CatalogTemplate {
    fn default() -> Self {
        Self::new(CATALOG_FILE_NAME, SCHEMA_FILE_NAME)
    }
}

/// Root element opening plus the explanatory comment. Message text uses
/// `%(name)s` placeholders, which the three variable attributes declare.
fn catalog_header(schema_file_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<messages
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:noNamespaceSchemaLocation="{}"
    variablePrefix="%("
    variableSuffix=")s"
    variablePrefixEscape="" >
<!--
This file contains the diagnostic messages text. Each message has a code
that corresponds to the message code in the log file, level (severity),
args (available through log file), and message replacement text.

(Messages with dynamically composed error codes or text content
are reported as "(dynamic)".)

-->

"#,
        schema_file_name
    )
}
