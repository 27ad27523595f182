// CSVW (CLDF Generic) のメタデータ
// 各表の列はここで定義した順に CSV へ書き出す

use serde_json::{json, Value};

pub static METADATA_FILE_NAME: &str = "cldf-metadata.json";

// 複数の値をとる列の区切り
pub const LIST_SEPARATOR: &str = " ";

// CLDF の analyzedWord, gloss はタブ区切りと決まっている
pub const WORD_SEPARATOR: &str = "\t";

static CLDF_TERMS: &str = "http://cldf.clld.org/v1.0/terms.rdf";

#[derive(Debug)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub datatype: &'static str,
    pub separator: Option<&'static str>,
    pub property: Option<&'static str>, // CLDF の用語
}

#[derive(Debug)]
pub struct ForeignKeySpec {
    pub column: &'static str,
    pub table: &'static str,
    pub table_column: &'static str,
}

#[derive(Debug)]
pub struct TableSpec {
    pub url: &'static str,
    pub component: Option<&'static str>,
    pub columns: &'static [ColumnSpec],
    pub foreign_keys: &'static [ForeignKeySpec],
}

const fn column(name: &'static str, datatype: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        datatype,
        separator: None,
        property: None,
    }
}

const fn list_column(name: &'static str, datatype: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        datatype,
        separator: Some(LIST_SEPARATOR),
        property: None,
    }
}

const fn term_column(name: &'static str, property: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        datatype: "string",
        separator: None,
        property: Some(property),
    }
}

const fn word_column(name: &'static str, property: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        datatype: "string",
        separator: Some(WORD_SEPARATOR),
        property: Some(property),
    }
}

const fn foreign_key(
    column: &'static str,
    table: &'static str,
    table_column: &'static str,
) -> ForeignKeySpec {
    ForeignKeySpec {
        column,
        table,
        table_column,
    }
}

pub static LANGUAGE_TABLE: TableSpec = TableSpec {
    url: "languages.csv",
    component: Some("LanguageTable"),
    columns: &[
        term_column("ID", "id"),
        term_column("Name", "name"),
        term_column("Glottocode", "glottocode"),
    ],
    foreign_keys: &[],
};

pub static POEM_TABLE: TableSpec = TableSpec {
    url: "poems.csv",
    component: None,
    columns: &[term_column("ID", "id"), column("Title", "string")],
    foreign_keys: &[],
};

pub static EXAMPLE_TABLE: TableSpec = TableSpec {
    url: "examples.csv",
    component: Some("ExampleTable"),
    columns: &[
        term_column("ID", "id"),
        term_column("Language_ID", "languageReference"),
        term_column("Primary_Text", "primaryText"),
        word_column("Analyzed_Word", "analyzedWord"),
        word_column("Gloss", "gloss"),
        column("Poem_ID", "string"),
        list_column("Entry_IDS", "string"),
        column("Stanza_Number", "integer"),
        column("Line_Number", "integer"),
        column("Phrase_Number", "integer"),
        list_column("Rhyme_Words", "string"),
        list_column("Rhyme_Word_Indices", "string"),
        list_column("Rhyme_IDS", "string"),
    ],
    foreign_keys: &[
        foreign_key("Language_ID", "languages.csv", "ID"),
        foreign_key("Poem_ID", "poems.csv", "ID"),
        foreign_key("Entry_IDS", "entries.csv", "ID"),
    ],
};

pub static ENTRY_TABLE: TableSpec = TableSpec {
    url: "entries.csv",
    component: Some("EntryTable"),
    columns: &[
        term_column("ID", "id"),
        term_column("Language_ID", "languageReference"),
        term_column("Headword", "headword"),
        column("MiddleChinese", "string"),
        column("OCBS", "string"),
        list_column("Example_IDS", "string"),
    ],
    foreign_keys: &[
        foreign_key("Language_ID", "languages.csv", "ID"),
        foreign_key("Example_IDS", "examples.csv", "ID"),
    ],
};

pub static TABLES: [&TableSpec; 4] = [&LANGUAGE_TABLE, &POEM_TABLE, &EXAMPLE_TABLE, &ENTRY_TABLE];

fn column_to_json(column: &ColumnSpec) -> Value {
    let mut value = json!({
        "name": column.name,
        "datatype": column.datatype,
    });
    if let Some(separator) = column.separator {
        value["separator"] = json!(separator);
    }
    if let Some(property) = column.property {
        value["propertyUrl"] = json!(format!("{}#{}", CLDF_TERMS, property));
    }
    value
}

fn table_to_json(table: &TableSpec) -> Value {
    let foreign_keys: Vec<Value> = table
        .foreign_keys
        .iter()
        .map(|fk| {
            json!({
                "columnReference": [fk.column],
                "reference": {
                    "resource": fk.table,
                    "columnReference": [fk.table_column],
                },
            })
        })
        .collect();

    let mut value = json!({
        "url": table.url,
        "tableSchema": {
            "columns": table.columns.iter().map(column_to_json).collect::<Vec<_>>(),
            "primaryKey": ["ID"],
            "foreignKeys": foreign_keys,
        },
    });
    if let Some(component) = table.component {
        value["dc:conformsTo"] = json!(format!("{}#{}", CLDF_TERMS, component));
    }
    value
}

pub fn build_metadata() -> Value {
    json!({
        "@context": ["http://www.w3.org/ns/csvw", { "@language": "en" }],
        "dc:conformsTo": format!("{}#Generic", CLDF_TERMS),
        "dialect": { "commentPrefix": null },
        "tables": TABLES.iter().map(|t| table_to_json(t)).collect::<Vec<_>>(),
    })
}
