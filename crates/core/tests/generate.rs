//! Integration tests for code generation.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use oagen_core::config::HandlersConfig;
use oagen_core::{
    Config, DefaultResolver, Document, GenerateError, GenerationReport, Generator, Severity,
};

const PETSTORE: &str = r##"{
  "openapi": "3.0.3",
  "paths": {
    "/pet": {
      "post": {
        "operationId": "addPet",
        "tags": ["pet"],
        "summary": "Add a new pet",
        "requestBody": {
          "required": true,
          "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
          }
        },
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
            }
          }
        }
      }
    },
    "/pet/{petId}": {
      "parameters": [
        { "name": "petId", "in": "path", "required": true, "schema": { "type": "integer" } }
      ],
      "get": {
        "operationId": "getPetById",
        "tags": ["pet"],
        "parameters": [
          { "name": "X-Trace", "in": "header", "schema": { "type": "string" } }
        ],
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
            }
          }
        }
      }
    },
    "/store/inventory": {
      "get": {
        "operationId": "getInventory",
        "tags": ["store"],
        "parameters": [
          { "name": "status", "in": "query", "schema": { "type": "string" } }
        ],
        "responses": {
          "200": {
            "description": "ok",
            "content": {
              "application/json": {
                "schema": {
                  "type": "object",
                  "additionalProperties": { "type": "integer" }
                }
              }
            }
          }
        }
      }
    }
  },
  "components": {
    "schemas": {
      "Category": {
        "type": "object",
        "properties": {
          "id": { "type": "integer" },
          "parent": { "$ref": "#/components/schemas/Category" }
        }
      },
      "Pet": {
        "type": "object",
        "required": ["name"],
        "properties": {
          "id": { "type": "integer" },
          "name": { "type": "string" },
          "category": { "$ref": "#/components/schemas/Category" },
          "status": { "type": "string", "enum": ["available", "sold", "available"] },
          "tag": { "type": "string", "nullable": true }
        }
      },
      "pet": {
        "type": "object",
        "properties": {
          "owner": { "$ref": "#/components/schemas/Missing" }
        }
      }
    }
  }
}"##;

fn run(document: &str, config: Config) -> GenerationReport {
    let document = Document::from_json(document).unwrap();
    let resolver = DefaultResolver::new(config);
    Generator::from_config(&document, &resolver).generate_all()
}

fn source<'r>(report: &'r GenerationReport, path: &str) -> &'r str {
    report
        .file(path)
        .unwrap_or_else(|| {
            let paths: Vec<_> = report.files.iter().map(|f| f.path.display().to_string()).collect();
            unreachable!("no file at {path}, generated: {paths:?}")
        })
        .source
        .as_str()
}

#[test]
fn test_generation_is_byte_identical_across_runs() {
    let first = run(PETSTORE, Config::default());
    let second = run(PETSTORE, Config::default());

    assert!(!first.files.is_empty());
    let printed = |report: &GenerationReport| {
        report
            .files
            .iter()
            .map(|file| (file.path.clone(), file.print()))
            .collect::<Vec<_>>()
    };
    assert_eq!(printed(&first), printed(&second));
}

#[test]
fn test_expected_files_are_produced() {
    let report = run(PETSTORE, Config::default());
    assert!(report.is_success(), "failures: {:?}", report.failures);

    for path in [
        "gen/zod/categorySchema.ts",
        "gen/zod/petSchema.ts",
        "gen/zod/pet2Schema.ts",
        "gen/clients/operations.ts",
        "gen/clients/petController/addPet.ts",
        "gen/zod/petController/AddPet.ts",
        "gen/clients/petController/getPetById.ts",
        "gen/zod/petController/GetPetById.ts",
        "gen/clients/storeController/getInventory.ts",
        "gen/zod/storeController/GetInventory.ts",
    ] {
        assert!(report.file(path).is_some(), "missing {path}");
    }
    assert!(
        report.files.iter().all(|file| file.meta.plugin != "msw"),
        "handlers are only generated when configured"
    );
}

#[test]
fn test_imports_are_used_by_the_source() {
    let mut config = Config::default();
    config.handlers = Some(HandlersConfig::default());
    let report = run(PETSTORE, config);

    for file in &report.files {
        for import in file.merged_imports() {
            for binding in import.bindings() {
                assert!(
                    file.source.contains(binding),
                    "{} imports `{binding}` but never uses it:\n{}",
                    file.path.display(),
                    file.source
                );
            }
        }
    }
}

#[test]
fn test_references_are_imported_once_per_file() {
    let report = run(PETSTORE, Config::default());
    let file = report.file("gen/zod/petController/AddPet.ts").unwrap();

    let printed = file.print();
    assert_eq!(
        printed.matches("import { petSchema } from \"../petSchema\";").count(),
        1,
        "{printed}"
    );
    assert_eq!(
        file.source.matches("z.lazy(() => petSchema)").count(),
        2,
        "request and response both point at Pet:\n{}",
        file.source
    );
}

#[test]
fn test_self_reference_does_not_import_itself() {
    let report = run(PETSTORE, Config::default());
    let file = report.file("gen/zod/categorySchema.ts").unwrap();

    assert!(file.source.contains("parent: z.lazy(() => categorySchema).optional()"), "{}", file.source);
    assert!(
        file.imports.iter().all(|import| !import.names.contains(&"categorySchema".to_string())),
        "{:?}",
        file.imports
    );
}

#[test]
fn test_component_schema_lowering() {
    let report = run(PETSTORE, Config::default());
    let pet = source(&report, "gen/zod/petSchema.ts");

    assert!(pet.starts_with("export const petSchema = z.object({ "), "{pet}");
    assert!(pet.contains("name: z.string()"), "{pet}");
    assert!(pet.contains("id: z.number().int().optional()"), "{pet}");
    assert!(
        pet.contains(r#"status: z.enum(["available", "sold"]).optional()"#),
        "{pet}"
    );
    assert!(pet.contains("tag: z.string().nullish()"), "{pet}");
    assert!(pet.contains("export type Pet = z.infer<typeof petSchema>;"), "{pet}");
}

#[test]
fn test_colliding_names_are_disambiguated() {
    let report = run(PETSTORE, Config::default());
    let second = source(&report, "gen/zod/pet2Schema.ts");

    assert!(second.starts_with("export const pet2Schema = "), "{second}");
    assert!(second.contains("export type Pet2 = z.infer<typeof pet2Schema>;"), "{second}");
}

#[test]
fn test_dangling_reference_degrades_with_diagnostic() {
    let report = run(PETSTORE, Config::default());
    let second = source(&report, "gen/zod/pet2Schema.ts");

    assert!(report.is_success());
    assert!(second.contains("owner: z.any()"), "{second}");
    assert!(
        report
            .diagnostics
            .iter()
            .any(|d| d.message.contains("#/components/schemas/Missing")),
        "{:?}",
        report.diagnostics
    );
}

#[test]
fn test_operation_index_lists_every_operation() {
    let report = run(PETSTORE, Config::default());
    let index = source(&report, "gen/clients/operations.ts");

    assert!(index.starts_with("export const operations = {"), "{index}");
    assert!(index.trim_end().ends_with("} as const;"), "{index}");
    assert!(index.contains(r#""path": "/pet/:petId""#), "{index}");
    assert!(index.contains(r#""method": "get""#), "{index}");
    let add = index.find("\"addPet\"").unwrap();
    let get = index.find("\"getPetById\"").unwrap();
    let inventory = index.find("\"getInventory\"").unwrap();
    assert!(add < get && get < inventory, "document order expected:\n{index}");
}

#[test]
fn test_get_client_carries_path_and_header_params() {
    let report = run(PETSTORE, Config::default());
    let client = source(&report, "gen/clients/petController/getPetById.ts");

    assert!(
        client.contains(r#"petId: GetPetByIdPathParams["petId"]"#),
        "{client}"
    );
    assert!(client.contains("headers?: GetPetByIdHeaderParams"), "{client}");
    assert!(client.contains("url: `/pet/${petId}`"), "{client}");
    assert!(!client.contains("    data,"), "{client}");
}

#[test]
fn test_mutating_verbs_share_the_post_shape() {
    let baseline = run(PETSTORE, Config::default());
    let baseline_client = source(&baseline, "gen/clients/petController/addPet.ts");
    let baseline_types = source(&baseline, "gen/zod/petController/AddPet.ts");

    for verb in ["put", "patch", "delete"] {
        let document = PETSTORE.replacen("\"post\": {", &format!("\"{verb}\": {{"), 1);
        let report = run(&document, Config::default());
        let client = source(&report, "gen/clients/petController/addPet.ts");

        assert_eq!(
            client,
            baseline_client.replace("method: \"post\"", &format!("method: \"{verb}\"")),
            "{verb} client diverged from post"
        );
        assert_eq!(
            source(&report, "gen/zod/petController/AddPet.ts"),
            baseline_types,
            "{verb} types diverged from post"
        );
    }
}

#[test]
fn test_missing_operation_id_fails_only_that_operation() {
    let document = PETSTORE.replacen("\"operationId\": \"getPetById\",", "", 1);
    let report = run(&document, Config::default());

    assert!(!report.is_success());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].subject, "GET /pet/{petId}");
    assert!(matches!(
        report.failures[0].error,
        GenerateError::MissingOperationId { .. }
    ));
    assert!(report.file("gen/clients/petController/addPet.ts").is_some());
    assert!(report.file("gen/clients/storeController/getInventory.ts").is_some());
    assert!(
        !source(&report, "gen/clients/operations.ts").contains("/pet/:petId"),
        "operations without an id are left out of the index"
    );
}

#[test]
fn test_handlers_answer_with_response_factory() {
    let mut config = Config::default();
    config.handlers = Some(HandlersConfig::default());
    let report = run(PETSTORE, config);

    let file = report.file("gen/msw/petController/addPetHandler.ts").unwrap();
    assert_eq!(file.meta.plugin, "msw");
    assert_eq!(
        file.print(),
        r#"import { rest } from "msw";
import { createAddPetMutationResponse } from "../../mocks/petController/createAddPetMutationResponse";

export const addPetHandler = rest.post("*/pet", function handler(req, res, ctx) {
  return res(ctx.json(createAddPetMutationResponse()));
});
"#
    );
}

#[test]
fn test_operation_colliding_with_the_index_fails_alone() {
    let document = PETSTORE.replacen(
        r#""/store/inventory": {"#,
        r#""/operations": {
      "get": {
        "operationId": "operations",
        "responses": { "200": { "description": "ok" } }
      }
    },
    "/store/inventory": {"#,
        1,
    );
    let report = run(&document, Config::default());

    assert_eq!(report.failures.len(), 1, "{:?}", report.failures);
    assert_eq!(report.failures[0].subject, "operations");
    assert!(matches!(
        &report.failures[0].error,
        GenerateError::OutputConflict { path } if path.ends_with("gen/clients/operations.ts")
    ));
    assert!(
        report.file("gen/zod/Operations.ts").is_none(),
        "a failed operation keeps none of its files"
    );

    let index = source(&report, "gen/clients/operations.ts");
    assert!(index.starts_with("export const operations = {"), "{index}");
    assert_eq!(
        report
            .files
            .iter()
            .filter(|file| file.path.ends_with("gen/clients/operations.ts"))
            .count(),
        1
    );
    assert!(report.file("gen/clients/storeController/getInventory.ts").is_some());
}

#[test]
fn test_reference_to_a_non_schema_node_is_an_error_diagnostic() {
    let document = PETSTORE
        .replacen(
            r#""openapi": "3.0.3","#,
            r#""openapi": "3.0.3",
  "info": { "title": "Petstore" },"#,
            1,
        )
        .replacen(
            r#""id": { "type": "integer" },
          "parent""#,
            r##""id": { "type": "integer" },
          "title": { "$ref": "#/info/title" },
          "parent""##,
            1,
        );
    let report = run(&document, Config::default());

    let errors: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1, "{:?}", report.diagnostics);
    assert_eq!(errors[0].location, "#/info/title");
    assert!(source(&report, "gen/zod/categorySchema.ts").contains("title: z.lazy(() => titleSchema)"));
}
