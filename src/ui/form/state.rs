use crate::api::types::{Medicine, MedicineDraft};

pub const FIELD_NAME: usize = 0;
pub const FIELD_DESCRIPTION: usize = 1;
pub const FIELD_PRICE: usize = 2;
pub const FIELD_STOCK: usize = 3;

/// Which record a visible form writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: i64 },
}

/// One editable text field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Visible {
        mode: FormMode,
        fields: Vec<FormField>,
        focused: usize,
        /// Parse error from the last submit attempt, shown inside the
        /// form until the user types again.
        field_error: Option<String>,
    },
}

impl FormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn open_add() -> Self {
        FormState::Visible {
            mode: FormMode::Add,
            fields: blank_fields(),
            focused: 0,
            field_error: None,
        }
    }

    /// Open in edit mode with the record's current values pre-filled.
    pub fn open_edit(medicine: &Medicine) -> Self {
        let mut fields = blank_fields();
        fields[FIELD_NAME].value = medicine.name.clone();
        fields[FIELD_DESCRIPTION].value = medicine.description.clone().unwrap_or_default();
        fields[FIELD_PRICE].value = format!("{:.2}", medicine.price);
        fields[FIELD_STOCK].value = medicine.stock.to_string();

        FormState::Visible {
            mode: FormMode::Edit { id: medicine.id },
            fields,
            focused: 0,
            field_error: None,
        }
    }
}

fn blank_fields() -> Vec<FormField> {
    vec![
        FormField {
            label: "Name",
            value: String::new(),
        },
        FormField {
            label: "Description",
            value: String::new(),
        },
        FormField {
            label: "Price",
            value: String::new(),
        },
        FormField {
            label: "Stock",
            value: String::new(),
        },
    ]
}

/// Parse the form fields into a draft.
///
/// `Err` carries a message to show inside the form; the form stays
/// open. Name is required; the numeric fields may be left blank and
/// are then omitted from the payload.
pub fn parse_draft(fields: &[FormField]) -> Result<MedicineDraft, String> {
    let value = |idx: usize| fields.get(idx).map(|f| f.value.trim()).unwrap_or("");

    let name = value(FIELD_NAME);
    if name.is_empty() {
        return Err("Name is required".to_string());
    }

    let price = match value(FIELD_PRICE) {
        "" => None,
        raw => Some(
            raw.parse::<f64>()
                .map_err(|_| "Price must be a number".to_string())?,
        ),
    };

    let stock = match value(FIELD_STOCK) {
        "" => None,
        raw => Some(
            raw.parse::<u32>()
                .map_err(|_| "Stock must be a whole number".to_string())?,
        ),
    };

    let description = match value(FIELD_DESCRIPTION) {
        "" => None,
        raw => Some(raw.to_string()),
    };

    Ok(MedicineDraft {
        name: Some(name.to_string()),
        description,
        price,
        stock,
    })
}
