use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum Gpx2StatsError {
    XmlParse(quick_xml::Error),
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

impl std::fmt::Display for Gpx2StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::XmlParse(e) => write!(f, "XML parse error: {e}"),
            Self::MissingAttribute { element, attribute } => {
                write!(f, "Missing attribute '{attribute}' on <{element}>")
            }
            Self::InvalidAttribute {
                element,
                attribute,
                value,
            } => write!(
                f,
                "Invalid value '{value}' for attribute '{attribute}' on <{element}>"
            ),
        }
    }
}

impl std::error::Error for Gpx2StatsError {}

impl From<quick_xml::Error> for Gpx2StatsError {
    fn from(e: quick_xml::Error) -> Self {
        Self::XmlParse(e)
    }
}

impl From<Gpx2StatsError> for JsValue {
    fn from(e: Gpx2StatsError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
