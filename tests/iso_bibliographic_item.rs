//! Integration tests for building, deriving and rendering ISO bibliographic items

mod common;

use std::rc::Rc;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use common::{create_iso_item, create_minimal_item, ISO_BIB_ITEM_JSON};
use isobib::{
    BibError, BibliographicItem, ExtensionElement, IdentityAttribute, RecordSpec, RenderOptions,
    ShortrefOptions, XmlRenderer,
};

#[test]
fn test_fixture_accessors() {
    let item = create_iso_item();

    assert_eq!(item.fetched(), Some("2018-04-20"));
    assert_eq!(item.identifiers()[0].id(), "ISO 19115-1:2014");
    assert_eq!(item.identifiers()[0].project_number(), Some("19115"));
    assert_eq!(item.edition(), Some("1"));
    assert_eq!(item.languages(), ["en", "fr"]);
    assert_eq!(item.doc_type(), Some("international-standard"));
    assert_eq!(item.status().stage(), Some("60"));
    assert_eq!(item.source_url(), Some("https://www.iso.org/standard/53798.html"));
    assert_eq!(
        item.url("obp"),
        Some("https://www.iso.org/obp/ui/#!iso:std:53798:en")
    );
    assert_eq!(item.url("pdf"), None);
    assert_eq!(item.relations().of_type("updates").len(), 2);
    assert_eq!(item.ics()[0].code(), "35.240.70");

    let fr = item.title("fr").expect("French title");
    assert_eq!(
        fr.to_string(),
        "Information géographique -- Métadonnées -- Partie 1: Principes de base"
    );
    assert!(item.title("de").is_none());
    assert_eq!(item.abstract_for("en").map(|a| a.format()), Some("text/plain"));
}

#[test]
fn test_root_id_and_title_text() {
    let xml = create_minimal_item().to_xml().expect("render");

    assert!(xml.contains(r#"<bibitem id="ISO19115-1-2014">"#));
    assert!(xml.contains(concat!(
        r#"<title format="text/plain" language="en" script="">"#,
        "Metadata -- Part 1: Fundamentals</title>"
    )));
}

#[test]
fn test_full_render_order() {
    let xml = create_iso_item().to_xml().expect("render");

    let positions: Vec<usize> = [
        "<fetched>",
        "<title ",
        r#"<uri type="src">"#,
        "<docidentifier ",
        r#"<date type="published">"#,
        "<contributor>",
        "<edition>",
        "<language>",
        "<script>",
        "<abstract ",
        "<status>",
        "<copyright>",
        r#"<relation type="updates">"#,
        "<editorialgroup>",
        "<ics>",
    ]
    .iter()
    .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{xml}");
    assert!(xml.contains(concat!(
        r#"<technical_committee number="211" type="technicalCommittee">"#,
        "ISO/TC 211 Geographic information/Geomatics</technical_committee>"
    )));
    assert!(xml.contains(r#"<role type="publisher"/>"#));
    assert!(!xml.contains("<allparts>"));
}

#[test]
fn test_to_all_parts() {
    let mut item = create_iso_item();
    let all_parts = item.to_all_parts().expect("derive all parts");

    // The original keeps its content and gains one relation.
    assert_eq!(item.identifiers()[0].id(), "ISO 19115-1:2014");
    assert_eq!(
        item.title("en").and_then(|t| t.part_part()),
        Some("Part 1: Fundamentals")
    );
    assert_eq!(item.abstracts().len(), 2);
    assert_eq!(item.relations().len(), 3);
    assert_eq!(item.relations().of_type("partOf").len(), 1);
    assert!(!item.is_all_parts());

    // The derived record lost its part.
    assert_eq!(all_parts.identifiers()[0].id(), "ISO 19115:2014 (all parts)");
    assert_eq!(all_parts.identifiers()[0].canonical(), "ISO 19115-2014 (all parts)");
    assert_eq!(all_parts.identifiers()[0].part_number(), None);
    assert!(all_parts.titles().iter().all(|t| t.part_part().is_none()));
    assert!(all_parts.abstracts().is_empty());
    assert!(all_parts.is_all_parts());
    assert_eq!(all_parts.dates().len(), 1);

    let relation = item.relations().of_type("partOf")[0];
    let embedded = relation.bibitem().expect("embedded record");
    assert!(Rc::ptr_eq(embedded, &all_parts));

    let workgroup = item.workgroup().expect("workgroup");
    assert!(Rc::ptr_eq(workgroup, all_parts.workgroup().expect("workgroup")));

    assert_eq!(
        all_parts.shortref(ShortrefOptions::default()),
        "ISO 19115:2014: All Parts"
    );
}

#[test]
fn test_to_all_parts_twice_is_rejected() {
    let mut item = create_iso_item();
    item.to_all_parts().expect("first derivation");
    let err = item.to_all_parts().unwrap_err();
    assert!(matches!(err, BibError::AlreadyTransformed(_)));
    assert_eq!(item.relations().of_type("partOf").len(), 1);
}

#[test]
fn test_to_most_recent_reference() {
    let mut item = create_iso_item();
    let latest = item.to_most_recent_reference().expect("derive latest");

    assert_eq!(latest.identifiers()[0].id(), "ISO 19115-1");
    assert!(latest.dates().is_empty());
    assert!(latest.abstracts().is_empty());
    assert_eq!(item.dates().len(), 1);
    assert_eq!(item.relations().of_type("instance").len(), 1);
    assert_eq!(latest.shortref(ShortrefOptions::default()), "ISO 19115-1");

    assert!(matches!(
        item.to_most_recent_reference(),
        Err(BibError::AlreadyTransformed(_))
    ));
}

#[test]
fn test_both_derivations_render_nested() {
    let mut item = create_iso_item();
    item.to_all_parts().expect("all parts");
    item.to_most_recent_reference().expect("latest");

    let xml = item
        .to_xml_with(&RenderOptions::new().with_note("2014-04"))
        .expect("render");

    // The most-recent clone was taken after the partOf relation was added.
    assert_eq!(xml.matches("<bibitem ").count(), 4);
    assert_eq!(xml.matches(r#" id=""#).count(), 1);
    assert!(xml.contains(r#"<relation type="partOf">"#));
    assert!(xml.contains("<docidentifier type=\"ISO\">ISO 19115:2014 (all parts)</docidentifier>"));
    assert!(xml.contains(r#"<relation type="instance">"#));
    assert!(xml.contains("<docidentifier type=\"ISO\">ISO 19115-1</docidentifier>"));
    assert!(xml.contains("<allparts>true</allparts>"));
    assert_eq!(xml.matches("ISO DATE: 2014-04").count(), 1);
}

#[test]
fn test_render_is_deterministic() {
    let first = create_iso_item().to_xml().expect("render");
    let second = BibliographicItem::from_spec(
        RecordSpec::from_json(ISO_BIB_ITEM_JSON).expect("parse"),
    )
    .expect("build")
    .to_xml()
    .expect("render");
    assert_eq!(first, second);
}

#[test]
fn test_shortref() {
    let item = create_iso_item();
    assert_eq!(item.shortref(ShortrefOptions::default()), "ISO 19115-1:2014");
    assert_eq!(
        item.shortref(ShortrefOptions {
            no_year: true,
            all_parts: false,
        }),
        "ISO 19115-1"
    );
    assert_eq!(
        item.shortref(ShortrefOptions {
            no_year: false,
            all_parts: true,
        }),
        "ISO 19115-1:2014: All Parts"
    );
}

#[test]
fn test_write_into_enclosing_document() {
    let item = create_iso_item();
    let options = RenderOptions::new()
        .with_identity(IdentityAttribute::Suppress)
        .with_extension(ExtensionElement::new("doctype").with_text("international-standard"));

    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Start(BytesStart::new("references")))
        .expect("start");
    XmlRenderer::new(&options)
        .write(&item, &mut writer)
        .expect("write");
    writer
        .write_event(Event::End(BytesEnd::new("references")))
        .expect("end");
    let xml = String::from_utf8(writer.into_inner()).expect("utf-8");

    assert!(xml.starts_with(r#"<references><bibitem type="international-standard">"#));
    assert!(xml.ends_with("<doctype>international-standard</doctype></bibitem></references>"));
}
