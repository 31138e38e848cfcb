//! Heuristic element classification from rectangle geometry
//!
//! A fixed decision table over aspect ratio, width, height, and area maps
//! each candidate rectangle to an element kind and confidence. Rules are
//! evaluated top to bottom and the first match wins; rectangles matching no
//! rule are discarded rather than reported. The table's thresholds assume
//! the axis-limited bias of the region detector's growth and are not meant
//! to be optically correct.

use crate::analysis::pipeline::AnalyzerConfig;
use crate::analysis::palette::region_dominant_color;
use crate::raster::{PixelBuffer, Rect, Rgb};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed set of recognizable UI element kinds
///
/// Serialized with the exact lowercase spellings the report contract uses,
/// so a substitute analyzer producing the same strings is interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Clickable button
    Button,
    /// Body text run
    Text,
    /// Prominent heading text
    Heading,
    /// Single-line text input
    Input,
    /// Multi-line text input
    Textarea,
    /// Dropdown selector
    Select,
    /// Checkbox toggle
    Checkbox,
    /// Radio toggle
    Radio,
    /// On/off switch
    Switch,
    /// Content card
    Card,
    /// Raster or illustration content
    Image,
    /// Generic grouping container
    Container,
    /// Navigation bar or rail
    Navigation,
    /// Form region
    Form,
    /// Small status badge
    Badge,
    /// Inline alert or banner
    Alert,
    /// Hover tooltip
    Tooltip,
    /// Modal dialog
    Modal,
    /// Horizontal or vertical rule
    Divider,
    /// Breadcrumb trail
    Breadcrumb,
    /// Step indicator
    Stepper,
    /// Tab strip
    Tabs,
    /// Collapsible accordion
    Accordion,
    /// Menu or menu list
    Menu,
    /// User avatar
    Avatar,
    /// Standalone icon
    Icon,
    /// Hyperlink text
    Link,
    /// Item list
    List,
    /// Tabular data
    Table,
    /// Progress bar
    Progress,
    /// Loading spinner
    Spinner,
}

impl ElementKind {
    /// The lowercase report spelling of this kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Switch => "switch",
            Self::Card => "card",
            Self::Image => "image",
            Self::Container => "container",
            Self::Navigation => "navigation",
            Self::Form => "form",
            Self::Badge => "badge",
            Self::Alert => "alert",
            Self::Tooltip => "tooltip",
            Self::Modal => "modal",
            Self::Divider => "divider",
            Self::Breadcrumb => "breadcrumb",
            Self::Stepper => "stepper",
            Self::Tabs => "tabs",
            Self::Accordion => "accordion",
            Self::Menu => "menu",
            Self::Avatar => "avatar",
            Self::Icon => "icon",
            Self::Link => "link",
            Self::List => "list",
            Self::Table => "table",
            Self::Progress => "progress",
            Self::Spinner => "spinner",
        }
    }
}

/// Colors attributed to a detected element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementColors {
    /// Dominant fill color of the element's region
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background: Option<Rgb>,
    /// Foreground text color
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<Rgb>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub border: Option<Rgb>,
    /// Hover-state color
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hover: Option<Rgb>,
    /// Focus-state color
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub focus: Option<Rgb>,
    /// Gradient stops, when the fill is a gradient
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gradient: Option<Vec<Rgb>>,
}

/// Form-specific properties reported by richer analyzers
///
/// The heuristic path never fills these; they exist so reports from a
/// substitute analyzer deserialize without loss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProperties {
    /// Placeholder text shown in an empty field
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub placeholder: Option<String>,
    /// Whether the field is required
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub required: Option<bool>,
    /// Input type attribute, e.g. `email` or `password`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub input_type: Option<String>,
    /// Choices offered by a select element
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<Vec<String>>,
}

/// Accessibility annotations reported by richer analyzers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessibility {
    /// ARIA role
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    /// Accessible label
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

/// A classified UI element, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedElement {
    /// Element kind
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Element bounds within the source buffer
    pub bounds: Rect,
    /// Colors attributed to the element
    pub colors: ElementColors,
    /// Extracted text content; always absent on the heuristic path
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
    /// Heuristic certainty in `[0, 1]`, not a calibrated probability
    pub confidence: f64,
    /// Free-form styling hints from richer analyzers
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub styling: Option<BTreeMap<String, String>>,
    /// Visual variant name, e.g. `primary`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub variant: Option<String>,
    /// Size class name, e.g. `sm`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<String>,
    /// Interaction state, e.g. `disabled`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<String>,
    /// Form-specific properties
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub form_properties: Option<FormProperties>,
    /// Accessibility annotations
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub accessibility: Option<Accessibility>,
}

impl DetectedElement {
    /// Create a heuristic-path element: kind, bounds, fill color, confidence
    pub fn new(kind: ElementKind, bounds: Rect, background: Rgb, confidence: f64) -> Self {
        Self {
            kind,
            bounds,
            colors: ElementColors {
                background: Some(background),
                ..ElementColors::default()
            },
            content: None,
            confidence,
            styling: None,
            variant: None,
            size: None,
            state: None,
            form_properties: None,
            accessibility: None,
        }
    }
}

// Decision table bounds, checked in declaration order
const BUTTON_ASPECT: (f64, f64) = (1.5, 6.0);
const BUTTON_HEIGHT: (f64, f64) = (20.0, 80.0);
const BUTTON_WIDTH: (f64, f64) = (60.0, 300.0);
const TEXT_MIN_ASPECT: f64 = 4.0;
const TEXT_MAX_HEIGHT: f64 = 40.0;
const INPUT_ASPECT: (f64, f64) = (2.0, 8.0);
const INPUT_HEIGHT: (f64, f64) = (25.0, 60.0);
const INPUT_MIN_WIDTH: f64 = 100.0;
const CARD_MIN_AREA: f64 = 5000.0;
const CARD_ASPECT: (f64, f64) = (0.5, 3.0);
const IMAGE_MIN_AREA: f64 = 2000.0;
const IMAGE_ASPECT: (f64, f64) = (0.7, 1.5);
const CONTAINER_MIN_AREA: f64 = 1000.0;

const fn within(value: f64, bounds: (f64, f64)) -> bool {
    value >= bounds.0 && value <= bounds.1
}

/// Classify a candidate rectangle, or discard it
///
/// `background` is the rectangle's dominant fill color; it becomes
/// `colors.background` on the emitted element. Rules are checked in table
/// order so the specific kinds win over the broad `container` fallback.
pub fn classify(bounds: Rect, background: Rgb) -> Option<DetectedElement> {
    let aspect = bounds.aspect_ratio();
    let width = f64::from(bounds.width);
    let height = f64::from(bounds.height);
    let area = bounds.area() as f64;

    let (kind, confidence) = if within(aspect, BUTTON_ASPECT)
        && within(height, BUTTON_HEIGHT)
        && within(width, BUTTON_WIDTH)
    {
        (ElementKind::Button, 0.8)
    } else if aspect > TEXT_MIN_ASPECT && height <= TEXT_MAX_HEIGHT {
        (ElementKind::Text, 0.7)
    } else if within(aspect, INPUT_ASPECT)
        && within(height, INPUT_HEIGHT)
        && width >= INPUT_MIN_WIDTH
    {
        (ElementKind::Input, 0.6)
    } else if area > CARD_MIN_AREA && within(aspect, CARD_ASPECT) {
        (ElementKind::Card, 0.7)
    } else if area > IMAGE_MIN_AREA && within(aspect, IMAGE_ASPECT) {
        (ElementKind::Image, 0.6)
    } else if area > CONTAINER_MIN_AREA {
        (ElementKind::Container, 0.4)
    } else {
        return None;
    };

    Some(DetectedElement::new(kind, bounds, background, confidence))
}

/// Classify every candidate rectangle against its region's dominant color
///
/// Discarded rectangles are dropped silently; the surviving elements keep
/// the detector's scan order.
pub fn classify_regions(
    buffer: &PixelBuffer,
    regions: &[Rect],
    config: &AnalyzerConfig,
) -> Vec<DetectedElement> {
    regions
        .iter()
        .filter_map(|region| {
            let background = region_dominant_color(buffer, region, config);
            classify(*region, background)
        })
        .collect()
}
