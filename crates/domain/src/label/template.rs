//! ZPL layout for the screening label
//!
//! The frame and field geometry match the label stock in use and must not
//! drift: the box-drawing block, including the annotation text after each
//! command, is emitted byte for byte. Field values are inserted verbatim.
//! A value containing `^` or `~` will be read by the printer as a command.

use super::{LabelFields, LabelJob};

/// Box and rule commands, up to and including the last vertical rule
const FRAME: &str = concat!(
    "^XA\n",
    "^CI28\n",
    "^FO10,10^GB730,173,3^FS\n",
    "^FO10,10^GB365,35,3^FS          ; Horní levá buňka\n",
    "^FO10,10^GB730,35,3^FS          ; Horní pravá buňka\n",
    "^FO10,10^GB730,70,3^FS          ; Střední buňka\n",
    "^FO10,10^GB730,140,3^FS         ; Spodní rámeček\n",
    "^FO105,150^GB0,30,3^FS            ; První vertikální čára\n",
    "^FO245,150^GB0,30,3^FS            ; Druhá vertikální čára\n",
    "^FO310,150^GB0,30,3^FS            ; Třetí vertikální čára\n",
    "^FO545,150^GB0,30,3^FS            ; Čtvrtá vertikální čára\n",
    "^FO625,150^GB0,30,3^FS            ; Pátá vertikální čára\n",
);

const END_FORMAT: &str = "^XZ";

#[derive(Debug, Clone, Copy)]
enum Slot {
    Caption(&'static str),
    Timestamp,
    ControlType,
    CompanyName,
    ControlLabel,
    Ra,
    OperatorName,
    LabelNumber,
}

/// One `^FD` text field; `font` emits a `^CF0,h,h` change before it
#[derive(Debug, Clone, Copy)]
struct Placement {
    font: Option<u16>,
    x: u16,
    y: u16,
    slot: Slot,
}

const FIELDS: [Placement; 8] = [
    Placement { font: Some(20), x: 15, y: 155, slot: Slot::Caption("Date&Time") },
    Placement { font: None, x: 115, y: 155, slot: Slot::Timestamp },
    Placement { font: Some(50), x: 250, y: 100, slot: Slot::ControlType },
    Placement { font: Some(30), x: 100, y: 15, slot: Slot::CompanyName },
    Placement { font: Some(30), x: 30, y: 50, slot: Slot::ControlLabel },
    Placement { font: Some(30), x: 450, y: 15, slot: Slot::Ra },
    Placement { font: Some(25), x: 365, y: 155, slot: Slot::OperatorName },
    Placement { font: Some(20), x: 650, y: 155, slot: Slot::LabelNumber },
];

/// A finished ZPL document, ready to be sent as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes, matching the `^CI28` code page selection
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render one label. Pure: the same inputs always give the same bytes.
pub fn render(fields: &LabelFields, job: &LabelJob) -> RenderedDocument {
    let number = job.label_number.to_string();
    let mut zpl = String::with_capacity(FRAME.len() + 512);
    zpl.push_str(FRAME);

    for placement in FIELDS.iter() {
        if let Some(height) = placement.font {
            zpl.push_str(&format!("^CF0,{height},{height}\n"));
        }
        let text = match placement.slot {
            Slot::Caption(caption) => caption,
            Slot::Timestamp => job.timestamp.as_str(),
            Slot::ControlType => job.control_type.label(),
            Slot::CompanyName => fields.company_name.as_str(),
            Slot::ControlLabel => fields.control_label.as_str(),
            Slot::Ra => fields.ra.as_str(),
            Slot::OperatorName => job.operator_name.as_str(),
            Slot::LabelNumber => number.as_str(),
        };
        zpl.push_str(&format!(
            "^FO{},{}^FD{}^FS\n",
            placement.x, placement.y, text
        ));
    }

    zpl.push_str(END_FORMAT);
    RenderedDocument(zpl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{ControlType, LabelNumber};

    fn sample() -> (LabelFields, LabelJob) {
        let fields = LabelFields {
            company_name: "Acme".to_string(),
            ra: "RA1".to_string(),
            control_label: "C1".to_string(),
        };
        let job = LabelJob {
            control_type: ControlType::SpxByXry,
            operator_name: "Jane".to_string(),
            timestamp: "01JAN25 10:00".to_string(),
            label_number: LabelNumber::new(1).unwrap(),
        };
        (fields, job)
    }

    const EXPECTED: &str = concat!(
        "^XA\n",
        "^CI28\n",
        "^FO10,10^GB730,173,3^FS\n",
        "^FO10,10^GB365,35,3^FS          ; Horní levá buňka\n",
        "^FO10,10^GB730,35,3^FS          ; Horní pravá buňka\n",
        "^FO10,10^GB730,70,3^FS          ; Střední buňka\n",
        "^FO10,10^GB730,140,3^FS         ; Spodní rámeček\n",
        "^FO105,150^GB0,30,3^FS            ; První vertikální čára\n",
        "^FO245,150^GB0,30,3^FS            ; Druhá vertikální čára\n",
        "^FO310,150^GB0,30,3^FS            ; Třetí vertikální čára\n",
        "^FO545,150^GB0,30,3^FS            ; Čtvrtá vertikální čára\n",
        "^FO625,150^GB0,30,3^FS            ; Pátá vertikální čára\n",
        "^CF0,20,20\n",
        "^FO15,155^FDDate&Time^FS\n",
        "^FO115,155^FD01JAN25 10:00^FS\n",
        "^CF0,50,50\n",
        "^FO250,100^FDSPX by XRY^FS\n",
        "^CF0,30,30\n",
        "^FO100,15^FDAcme^FS\n",
        "^CF0,30,30\n",
        "^FO30,50^FDC1^FS\n",
        "^CF0,30,30\n",
        "^FO450,15^FDRA1^FS\n",
        "^CF0,25,25\n",
        "^FO365,155^FDJane^FS\n",
        "^CF0,20,20\n",
        "^FO650,155^FD000001^FS\n",
        "^XZ",
    );

    #[test]
    fn test_render_matches_layout_exactly() {
        let (fields, job) = sample();
        assert_eq!(render(&fields, &job).as_str(), EXPECTED);
    }

    #[test]
    fn test_render_is_deterministic() {
        let (fields, job) = sample();
        let first = render(&fields, &job);
        let second = render(&fields, &job);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_each_value_appears_once() {
        let (fields, job) = sample();
        let doc = render(&fields, &job);
        for value in ["Acme", "RA1", "C1", "01JAN25 10:00", "Jane", "000001", "SPX by XRY"] {
            assert_eq!(doc.as_str().matches(value).count(), 1, "value {value}");
        }
    }

    #[test]
    fn test_document_is_framed() {
        let (fields, job) = sample();
        let doc = render(&fields, &job);
        assert!(doc.as_str().starts_with("^XA\n"));
        assert!(doc.as_str().ends_with("^FS\n^XZ"));
    }

    #[test]
    fn test_values_are_not_escaped() {
        let (mut fields, job) = sample();
        fields.company_name = "A^B".to_string();
        let doc = render(&fields, &job);
        assert!(doc.as_str().contains("^FO100,15^FDA^B^FS"));
    }

    #[test]
    fn test_empty_operator_name() {
        let (fields, mut job) = sample();
        job.operator_name.clear();
        let doc = render(&fields, &job);
        assert!(doc.as_str().contains("^FO365,155^FD^FS"));
    }
}
