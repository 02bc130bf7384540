use crate::entity::EntityKind;
use crate::schema::patterns::{HEX_COLOR, SHORT_CODE};
use crate::schema::{EntitySchema, FieldLock, FieldSpec, PayloadType};
use crate::validation::Rule;

pub static INSTRUMENT: EntitySchema = EntitySchema {
    entity: EntityKind::Instrument,
    fields: &[
        FieldSpec::text("instrumentname", "Instrument Name").with_rules(&[
            Rule::Required {
                message: "Instrument name is required",
            },
            Rule::MaxLength {
                max: 100,
                message: "Instrument name must be at most 100 characters",
            },
        ]),
        FieldSpec::text("make", "Make"),
        FieldSpec::text("serialno", "Serial Number")
            .with_rules(&[Rule::Required {
                message: "Serial number is required",
            }])
            .with_lock(FieldLock::AfterPopulate),
        FieldSpec::reference(
            "nodalid",
            "Nodal",
            EntityKind::Nodal,
            "id",
            "nodalname",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a nodal",
        }]),
        FieldSpec::reference(
            "departmentid",
            "Department",
            EntityKind::Department,
            "id",
            "departmentname",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a department",
        }]),
        FieldSpec::date("installationdate", "Installation Date").with_rules(&[Rule::Date {
            message: "Enter a valid installation date",
        }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["instrumentname", "make", "serialno"],
    display_field: "instrumentname",
    sort_field: "instrumentname",
};

pub static COLOR: EntitySchema = EntitySchema {
    entity: EntityKind::Color,
    fields: &[
        FieldSpec::text("colorname", "Color Name").with_rules(&[
            Rule::Required {
                message: "Color name is required",
            },
            Rule::MaxLength {
                max: 50,
                message: "Color name must be at most 50 characters",
            },
        ]),
        FieldSpec::text("colorcode", "Color Code").with_rules(&[
            Rule::Required {
                message: "Color code is required",
            },
            Rule::Pattern {
                pattern: HEX_COLOR,
                message: "Enter a valid hex color code (e.g. #FF0000)",
            },
        ]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["colorname", "colorcode"],
    display_field: "colorname",
    sort_field: "colorname",
};

pub static SPECIMEN_TYPE: EntitySchema = EntitySchema {
    entity: EntityKind::SpecimenType,
    fields: &[
        FieldSpec::text("specimenname", "Specimen Type").with_rules(&[
            Rule::Required {
                message: "Specimen type is required",
            },
            Rule::MaxLength {
                max: 100,
                message: "Specimen type must be at most 100 characters",
            },
        ]),
        // Tube/container colour.
        FieldSpec::reference(
            "colorid",
            "Container Color",
            EntityKind::Color,
            "id",
            "colorname",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a container color",
        }]),
        FieldSpec::text_area("description", "Description").with_rules(&[Rule::MaxLength {
            max: 250,
            message: "Description must be at most 250 characters",
        }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["specimenname"],
    display_field: "specimenname",
    sort_field: "specimenname",
};

pub static REPORT_TYPE: EntitySchema = EntitySchema {
    entity: EntityKind::ReportType,
    fields: &[
        FieldSpec::text("reporttypename", "Report Type").with_rules(&[
            Rule::Required {
                message: "Report type is required",
            },
            Rule::MaxLength {
                max: 100,
                message: "Report type must be at most 100 characters",
            },
        ]),
        FieldSpec::text_area("description", "Description").with_rules(&[Rule::MaxLength {
            max: 250,
            message: "Description must be at most 250 characters",
        }]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["reporttypename"],
    display_field: "reporttypename",
    sort_field: "reporttypename",
};

pub static PROFILE: EntitySchema = EntitySchema {
    entity: EntityKind::Profile,
    fields: &[
        FieldSpec::text("profilename", "Profile Name").with_rules(&[
            Rule::Required {
                message: "Profile name is required",
            },
            Rule::MaxLength {
                max: 150,
                message: "Profile name must be at most 150 characters",
            },
        ]),
        FieldSpec::text("profilecode", "Profile Code").with_rules(&[
            Rule::Required {
                message: "Profile code is required",
            },
            Rule::Pattern {
                pattern: SHORT_CODE,
                message: "Profile code must be 2-10 upper-case letters or digits",
            },
        ]),
        FieldSpec::reference(
            "departmentid",
            "Department",
            EntityKind::Department,
            "id",
            "departmentname",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a department",
        }]),
        FieldSpec::decimal("price", "Price").with_rules(&[
            Rule::Required {
                message: "Price is required",
            },
            Rule::MinValue {
                min: 0.0,
                message: "Price cannot be negative",
            },
        ]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["profilename", "profilecode"],
    display_field: "profilename",
    sort_field: "profilename",
};

pub static INVESTIGATION: EntitySchema = EntitySchema {
    entity: EntityKind::Investigation,
    fields: &[
        FieldSpec::text("testname", "Test Name").with_rules(&[
            Rule::Required {
                message: "Test name is required",
            },
            Rule::MaxLength {
                max: 150,
                message: "Test name must be at most 150 characters",
            },
        ]),
        FieldSpec::text("testcode", "Test Code")
            .with_rules(&[
                Rule::Required {
                    message: "Test code is required",
                },
                Rule::Pattern {
                    pattern: SHORT_CODE,
                    message: "Test code must be 2-10 upper-case letters or digits",
                },
            ])
            .with_lock(FieldLock::AfterPopulate),
        FieldSpec::reference(
            "departmentid",
            "Department",
            EntityKind::Department,
            "id",
            "departmentname",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a department",
        }]),
        FieldSpec::reference(
            "specimentypeid",
            "Specimen Type",
            EntityKind::SpecimenType,
            "id",
            "specimenname",
            PayloadType::Integer,
        )
        .with_rules(&[Rule::Required {
            message: "Please select a specimen type",
        }]),
        FieldSpec::reference(
            "reporttypeid",
            "Report Type",
            EntityKind::ReportType,
            "id",
            "reporttypename",
            PayloadType::Integer,
        ),
        FieldSpec::reference(
            "unitid",
            "Unit",
            EntityKind::Unit,
            "id",
            "unitname",
            PayloadType::Integer,
        ),
        FieldSpec::decimal("price", "Price").with_rules(&[
            Rule::Required {
                message: "Price is required",
            },
            Rule::MinValue {
                min: 0.0,
                message: "Price cannot be negative",
            },
        ]),
        FieldSpec::integer("turnaroundhours", "Turnaround (hours)").with_rules(&[
            Rule::MinValue {
                min: 1.0,
                message: "Turnaround must be at least 1 hour",
            },
            Rule::MaxValue {
                max: 720.0,
                message: "Turnaround must be at most 720 hours",
            },
        ]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["testname", "testcode"],
    display_field: "testname",
    sort_field: "testname",
};

pub static UNIT: EntitySchema = EntitySchema {
    entity: EntityKind::Unit,
    fields: &[
        FieldSpec::text("unitname", "Unit").with_rules(&[
            Rule::Required {
                message: "Unit is required",
            },
            Rule::MaxLength {
                max: 20,
                message: "Unit must be at most 20 characters",
            },
        ]),
        FieldSpec::active_flag(),
    ],
    search_fields: &["unitname"],
    display_field: "unitname",
    sort_field: "unitname",
};
