use crate::prelude::{AnalyzeError, AnalyzeResult, RawWaypoint};

/// Lifts the ordered `<wpt>` sequence out of a GPX 1.1-shaped document.
///
/// Only the `<time>` and `<desc>` children are consulted; every other
/// part of the GPX structure is ignored. A document with a single
/// waypoint and one with many normalize to the same sequence, and a
/// well-formed document with no waypoints is a valid empty route.
pub fn extract_waypoints(xml: &str) -> AnalyzeResult<Vec<RawWaypoint>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|err| AnalyzeError::MalformedDocument(err.to_string()))?;

    let waypoints = doc
        .root_element()
        .children()
        .filter(|node| node.tag_name().name() == "wpt")
        .map(|wpt| RawWaypoint {
            time: child_text(wpt, "time"),
            desc: child_text(wpt, "desc"),
        })
        .collect();

    Ok(waypoints)
}

// Local-name comparison so documents with and without the GPX default
// namespace read the same.
fn child_text(node: roxmltree::Node, name: &str) -> Option<String> {
    node.children()
        .find(|child| child.tag_name().name() == name)
        .and_then(|child| child.text())
        .map(|text| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_waypoints_in_document_order() {
        let xml = r#"<?xml version="1.0"?>
            <gpx version="1.1">
              <wpt lat="47.0" lon="-3.0">
                <time>2024-03-01T10:00:00Z</time>
                <desc>first</desc>
              </wpt>
              <wpt lat="47.1" lon="-3.1">
                <time>2024-03-01T10:10:00Z</time>
                <desc>second</desc>
              </wpt>
            </gpx>"#;
        let waypoints = extract_waypoints(xml).unwrap();
        assert_eq!(waypoints.len(), 2);
        assert_eq!(waypoints[0].desc.as_deref(), Some("first"));
        assert_eq!(waypoints[1].time.as_deref(), Some("2024-03-01T10:10:00Z"));
    }

    #[test]
    fn single_waypoint_document_yields_one_entry() {
        let xml = r#"<gpx><wpt><time>2024-03-01T10:00:00Z</time><desc>only</desc></wpt></gpx>"#;
        let waypoints = extract_waypoints(xml).unwrap();
        assert_eq!(waypoints.len(), 1);
        assert_eq!(waypoints[0].desc.as_deref(), Some("only"));
    }

    #[test]
    fn missing_children_become_none() {
        let xml = r#"<gpx><wpt lat="0" lon="0"/></gpx>"#;
        let waypoints = extract_waypoints(xml).unwrap();
        assert_eq!(waypoints.len(), 1);
        assert_eq!(waypoints[0], RawWaypoint::default());
    }

    #[test]
    fn empty_document_is_not_an_error() {
        let waypoints = extract_waypoints("<gpx version=\"1.1\"></gpx>").unwrap();
        assert!(waypoints.is_empty());
    }

    #[test]
    fn malformed_xml_is_fatal() {
        let result = extract_waypoints("<gpx><wpt><time>2024-03-01");
        assert!(matches!(result, Err(AnalyzeError::MalformedDocument(_))));
    }

    #[test]
    fn default_namespace_documents_are_read() {
        let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1" version="1.1">
            <wpt lat="47.0" lon="-3.0">
              <time>2024-03-01T10:00:00Z</time>
              <desc>namespaced</desc>
            </wpt>
        </gpx>"#;
        let waypoints = extract_waypoints(xml).unwrap();
        assert_eq!(waypoints.len(), 1);
        assert_eq!(waypoints[0].desc.as_deref(), Some("namespaced"));
    }

    #[test]
    fn other_gpx_structure_is_ignored() {
        let xml = r#"<gpx>
            <metadata><name>race</name></metadata>
            <trk><trkseg><trkpt lat="0" lon="0"/></trkseg></trk>
            <wpt><desc>kept</desc></wpt>
        </gpx>"#;
        let waypoints = extract_waypoints(xml).unwrap();
        assert_eq!(waypoints.len(), 1);
        assert_eq!(waypoints[0].desc.as_deref(), Some("kept"));
    }
}
