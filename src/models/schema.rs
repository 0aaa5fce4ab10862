//! Declarative description of each collection's dialog fields and table
//! columns. The generic panel (form, table, delete flow) is driven entirely
//! by these tables.

use super::collection::Collection;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    LongText,
    Date,
    Integer { min: i64 },
    Decimal { min: f64, step: &'static str },
    Checkbox,
    Reference(Collection),
}

impl FieldKind {
    /// HTML input type, or the element name for non-`<input>` controls.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::LongText => "textarea",
            FieldKind::Date => "date",
            FieldKind::Integer { .. } | FieldKind::Decimal { .. } => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Reference(_) => "select",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Remote field name.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { key, label, kind, required: false, placeholder: "" }
}

const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { key, label, kind, required: true, placeholder: "" }
}

impl FieldDef {
    const fn hint(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// How a table cell renders its record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Leading column, emphasised.
    Primary(&'static str),
    Text(&'static str),
    Date(&'static str),
    DateRange(&'static str, &'static str),
    /// Name of the referenced record.
    Reference(&'static str, Collection),
    /// Muted badge with an optional unit suffix.
    Badge(&'static str, &'static str),
    Price(&'static str),
    /// Bezahlt/Offen badge that flips the flag when clicked.
    PaidToggle(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub cell: Cell,
}

const fn col(header: &'static str, cell: Cell) -> Column {
    Column { header, cell }
}

#[derive(Debug)]
pub struct EntitySchema {
    pub collection: Collection,
    pub subtitle: &'static str,
    pub add_label: &'static str,
    pub new_title: &'static str,
    pub edit_title: &'static str,
    pub delete_title: &'static str,
    pub delete_question: &'static str,
    pub empty_title: &'static str,
    pub empty_description: &'static str,
    pub fields: &'static [FieldDef],
    pub columns: &'static [Column],
    /// Date field pre-filled with today when adding.
    pub today_default: Option<&'static str>,
}

impl EntitySchema {
    pub fn field(&self, key: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.required)
    }
}

const IRREVERSIBLE: &str = "Diese Aktion kann nicht rückgängig gemacht werden.";

pub static INSTRUCTORS: EntitySchema = EntitySchema {
    collection: Collection::Instructors,
    subtitle: "Verwalten Sie Ihre Kursleiter",
    add_label: "Dozent hinzufügen",
    new_title: "Neuer Dozent",
    edit_title: "Dozent bearbeiten",
    delete_title: "Dozent löschen",
    delete_question: "Möchten Sie diesen Dozenten wirklich löschen?",
    empty_title: "Keine Dozenten",
    empty_description: "Fügen Sie Ihren ersten Dozenten hinzu, um loszulegen.",
    fields: &[
        required("name", "Name", FieldKind::Text).hint("Max Mustermann"),
        required("email", "E-Mail", FieldKind::Email).hint("max@example.com"),
        field("telefon", "Telefon", FieldKind::Phone).hint("+49 123 456789"),
        field("fachgebiet", "Fachgebiet", FieldKind::Text).hint("z.B. Informatik, Marketing"),
    ],
    columns: &[
        col("Name", Cell::Primary("name")),
        col("E-Mail", Cell::Text("email")),
        col("Telefon", Cell::Text("telefon")),
        col("Fachgebiet", Cell::Badge("fachgebiet", "")),
    ],
    today_default: None,
};

pub static ROOMS: EntitySchema = EntitySchema {
    collection: Collection::Rooms,
    subtitle: "Verwalten Sie Ihre Schulungsräume",
    add_label: "Raum hinzufügen",
    new_title: "Neuer Raum",
    edit_title: "Raum bearbeiten",
    delete_title: "Raum löschen",
    delete_question: "Möchten Sie diesen Raum wirklich löschen?",
    empty_title: "Keine Räume",
    empty_description: "Fügen Sie Ihren ersten Raum hinzu, um loszulegen.",
    fields: &[
        required("raumname", "Raumname", FieldKind::Text).hint("z.B. Seminarraum A"),
        required("gebaeude", "Gebäude", FieldKind::Text).hint("z.B. Hauptgebäude"),
        required("kapazitaet", "Kapazität", FieldKind::Integer { min: 1 }).hint("z.B. 20"),
    ],
    columns: &[
        col("Raumname", Cell::Primary("raumname")),
        col("Gebäude", Cell::Text("gebaeude")),
        col("Kapazität", Cell::Badge("kapazitaet", " Plätze")),
    ],
    today_default: None,
};

pub static PARTICIPANTS: EntitySchema = EntitySchema {
    collection: Collection::Participants,
    subtitle: "Verwalten Sie Ihre Kursteilnehmer",
    add_label: "Teilnehmer hinzufügen",
    new_title: "Neuer Teilnehmer",
    edit_title: "Teilnehmer bearbeiten",
    delete_title: "Teilnehmer löschen",
    delete_question: "Möchten Sie diesen Teilnehmer wirklich löschen?",
    empty_title: "Keine Teilnehmer",
    empty_description: "Fügen Sie Ihren ersten Teilnehmer hinzu, um loszulegen.",
    fields: &[
        required("name", "Name", FieldKind::Text).hint("Anna Beispiel"),
        required("email", "E-Mail", FieldKind::Email).hint("anna@example.com"),
        field("telefon", "Telefon", FieldKind::Phone).hint("+49 123 456789"),
        field("geburtsdatum", "Geburtsdatum", FieldKind::Date),
    ],
    columns: &[
        col("Name", Cell::Primary("name")),
        col("E-Mail", Cell::Text("email")),
        col("Telefon", Cell::Text("telefon")),
        col("Geburtsdatum", Cell::Date("geburtsdatum")),
    ],
    today_default: None,
};

pub static COURSES: EntitySchema = EntitySchema {
    collection: Collection::Courses,
    subtitle: "Verwalten Sie Ihre Kursangebote",
    add_label: "Kurs hinzufügen",
    new_title: "Neuer Kurs",
    edit_title: "Kurs bearbeiten",
    delete_title: "Kurs löschen",
    delete_question: "Möchten Sie diesen Kurs wirklich löschen? Alle zugehörigen Anmeldungen werden ebenfalls betroffen.",
    empty_title: "Keine Kurse",
    empty_description: "Fügen Sie Ihren ersten Kurs hinzu, um loszulegen.",
    fields: &[
        required("titel", "Titel", FieldKind::Text).hint("z.B. Einführung in Python"),
        field("beschreibung", "Beschreibung", FieldKind::LongText).hint("Kursbeschreibung..."),
        required("startdatum", "Startdatum", FieldKind::Date),
        required("enddatum", "Enddatum", FieldKind::Date),
        required("max_teilnehmer", "Max. Teilnehmer", FieldKind::Integer { min: 1 }).hint("z.B. 20"),
        required("preis", "Preis (€)", FieldKind::Decimal { min: 0.0, step: "0.01" }).hint("z.B. 299.00"),
        required("dozent", "Dozent", FieldKind::Reference(Collection::Instructors)).hint("Dozent auswählen"),
        required("raum", "Raum", FieldKind::Reference(Collection::Rooms)).hint("Raum auswählen"),
    ],
    columns: &[
        col("Titel", Cell::Primary("titel")),
        col("Zeitraum", Cell::DateRange("startdatum", "enddatum")),
        col("Dozent", Cell::Reference("dozent", Collection::Instructors)),
        col("Raum", Cell::Reference("raum", Collection::Rooms)),
        col("Max. TN", Cell::Badge("max_teilnehmer", "")),
        col("Preis", Cell::Price("preis")),
    ],
    today_default: None,
};

pub static REGISTRATIONS: EntitySchema = EntitySchema {
    collection: Collection::Registrations,
    subtitle: "Verwalten Sie Kursanmeldungen",
    add_label: "Anmeldung hinzufügen",
    new_title: "Neue Anmeldung",
    edit_title: "Anmeldung bearbeiten",
    delete_title: "Anmeldung löschen",
    delete_question: "Möchten Sie diese Anmeldung wirklich löschen?",
    empty_title: "Keine Anmeldungen",
    empty_description: "Erstellen Sie die erste Kursanmeldung.",
    fields: &[
        required("teilnehmer", "Teilnehmer", FieldKind::Reference(Collection::Participants))
            .hint("Teilnehmer auswählen"),
        required("kurs", "Kurs", FieldKind::Reference(Collection::Courses)).hint("Kurs auswählen"),
        required("anmeldedatum", "Anmeldedatum", FieldKind::Date),
        field("bezahlt", "Bezahlt", FieldKind::Checkbox),
    ],
    columns: &[
        col("Teilnehmer", Cell::Reference("teilnehmer", Collection::Participants)),
        col("Kurs", Cell::Reference("kurs", Collection::Courses)),
        col("Anmeldedatum", Cell::Date("anmeldedatum")),
        col("Bezahlt", Cell::PaidToggle("bezahlt")),
    ],
    today_default: Some("anmeldedatum"),
};

pub fn schema(collection: Collection) -> &'static EntitySchema {
    match collection {
        Collection::Instructors => &INSTRUCTORS,
        Collection::Rooms => &ROOMS,
        Collection::Participants => &PARTICIPANTS,
        Collection::Courses => &COURSES,
        Collection::Registrations => &REGISTRATIONS,
    }
}

/// Full delete confirmation text.
pub fn delete_description(schema: &EntitySchema) -> String {
    format!("{} {IRREVERSIBLE}", schema.delete_question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_reads_a_declared_field() {
        for c in Collection::ALL {
            let s = schema(c);
            assert_eq!(s.collection, c);
            for column in s.columns {
                let keys: Vec<&str> = match column.cell {
                    Cell::Primary(k)
                    | Cell::Text(k)
                    | Cell::Date(k)
                    | Cell::Reference(k, _)
                    | Cell::Badge(k, _)
                    | Cell::Price(k)
                    | Cell::PaidToggle(k) => vec![k],
                    Cell::DateRange(a, b) => vec![a, b],
                };
                for k in keys {
                    assert!(s.field(k).is_some(), "{c}: column reads unknown field {k}");
                }
            }
        }
    }

    #[test]
    fn references_point_at_other_collections() {
        for c in Collection::ALL {
            for f in schema(c).fields {
                if let FieldKind::Reference(target) = f.kind {
                    assert_ne!(target, c);
                    assert!(f.required);
                }
            }
        }
    }

    #[test]
    fn only_registrations_default_to_today() {
        assert_eq!(schema(Collection::Registrations).today_default, Some("anmeldedatum"));
        assert!(schema(Collection::Courses).today_default.is_none());
    }
}
