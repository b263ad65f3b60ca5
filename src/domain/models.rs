/// A single applicant's record as entered into the form.
///
/// All fields are free-form text. Nothing here is validated beyond the
/// required markers enforced at submission time, and nothing is persisted:
/// the record lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationData {
    pub name: String,
    pub course: String,
    pub college: String,
    pub contact: String,
    pub interests: String,
}

impl ApplicationData {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Course => &self.course,
            Field::College => &self.college,
            Field::Contact => &self.contact,
            Field::Interests => &self.interests,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Course => &mut self.course,
            Field::College => &mut self.college,
            Field::Contact => &mut self.contact,
            Field::Interests => &mut self.interests,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.field_mut(field) = value;
    }

    /// Whether every field carrying a required marker has content.
    pub fn required_fields_filled(&self) -> bool {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| f.is_required())
            .all(|f| !self.field(f).trim().is_empty())
    }
}

/// The editable attributes of the application form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Course,
    College,
    Contact,
    Interests,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Course,
        Field::College,
        Field::Contact,
        Field::Interests,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Course => "Course",
            Field::College => "College",
            Field::Contact => "WhatsApp / Contact Number",
            Field::Interests => "Tell us why you're interested",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "e.g. Rahul Verma",
            Field::Course => "e.g. BCA",
            Field::College => "e.g. Lucknow University",
            Field::Contact => "+91 98765 43210",
            Field::Interests => {
                "I want to learn app development and work on real-world projects in my city..."
            }
        }
    }

    /// Required markers match the original form: college and the interest
    /// statement stay optional.
    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Course | Field::Contact)
    }
}
