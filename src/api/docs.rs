//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! Schemas come from the `ToSchema` derives on the model types. The CRUD handlers are
//! generic, so their operations are described here from a table of collections instead of
//! per-handler attributes.

use super::error::ErrorBody;
use crate::model::{
    Brand, BrandCreate, BrandUpdate, Category, CategoryCreate, CategoryUpdate, Movie,
    MovieCreate, MovieUpdate, Product, ProductCreate, ProductUpdate, User, UserCreate,
    UserUpdate,
};
use axum::Json;
use utoipa::openapi::path::{
    Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::{
    ArrayBuilder, Content, ContentBuilder, Ref, RefOr, Required, Response, ResponseBuilder,
    Schema,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Store API",
        description = "CRUD for brands, categories, products, users and movies"
    ),
    components(schemas(
        Brand, BrandCreate, BrandUpdate,
        Category, CategoryCreate, CategoryUpdate,
        Product, ProductCreate, ProductUpdate,
        User, UserCreate, UserUpdate,
        Movie, MovieCreate, MovieUpdate,
        ErrorBody
    )),
    tags(
        (name = "brands", description = "Brands products can belong to"),
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Products referencing a brand and a category"),
        (name = "users", description = "Users with unique emails"),
        (name = "movies", description = "Standalone movie list")
    )
)]
pub struct ApiDoc;

/// One documented collection.
struct Collection {
    path: &'static str,
    label: &'static str,
    record: &'static str,
    create: &'static str,
    update: &'static str,
}

const COLLECTIONS: [Collection; 5] = [
    Collection {
        path: "brands",
        label: "Brand",
        record: "Brand",
        create: "BrandCreate",
        update: "BrandUpdate",
    },
    Collection {
        path: "categories",
        label: "Category",
        record: "Category",
        create: "CategoryCreate",
        update: "CategoryUpdate",
    },
    Collection {
        path: "products",
        label: "Product",
        record: "Product",
        create: "ProductCreate",
        update: "ProductUpdate",
    },
    Collection {
        path: "users",
        label: "User",
        record: "User",
        create: "UserCreate",
        update: "UserUpdate",
    },
    Collection {
        path: "movies",
        label: "Movie",
        record: "Movie",
        create: "MovieCreate",
        update: "MovieUpdate",
    },
];

fn json_content(schema: RefOr<Schema>) -> Content {
    ContentBuilder::new().schema(Some(schema)).build()
}

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn array_of(name: &str) -> RefOr<Schema> {
    RefOr::T(Schema::Array(ArrayBuilder::new().items(schema_ref(name)).build()))
}

fn response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", json_content(schema))
        .build()
}

fn error_response(description: &str) -> Response {
    response(description, schema_ref("ErrorBody"))
}

fn id_parameter(name: &str, description: String) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(description))
        .build()
}

fn operation(c: &Collection, id: String, summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tags(Some(vec![c.path.to_string()]))
        .operation_id(Some(id))
        .summary(Some(summary))
}

fn body(schema: &str) -> Option<utoipa::openapi::request_body::RequestBody> {
    Some(
        RequestBodyBuilder::new()
            .content("application/json", json_content(schema_ref(schema)))
            .required(Some(Required::True))
            .build(),
    )
}

fn write_operation(
    c: &Collection,
    verb: &str,
    summary: String,
    status: &str,
    payload: Option<&str>,
    with_id: bool,
) -> Operation {
    let mut op = operation(c, format!("{}_{}", verb, c.path), summary);
    if with_id {
        op = op
            .parameter(id_parameter("id", format!("{} id", c.label)))
            .response("404", error_response(&format!("{} not found", c.label)));
    }
    if let Some(schema) = payload {
        op = op.request_body(body(schema));
    }
    op.response(
        status,
        response(
            &format!("`{{message, data}}` where data is the {}", c.record),
            schema_ref(c.record),
        ),
    )
    .response("400", error_response("Invalid input or blocked by dependents"))
    .build()
}

fn collection_paths(c: &Collection) -> [(String, PathItem); 2] {
    let mut items = PathItem::default();
    items.get = Some(
        operation(c, format!("list_{}", c.path), format!("List {}", c.path))
            .response("200", response("All records in insertion order", array_of(c.record)))
            .build(),
    );
    items.post = Some(write_operation(
        c,
        "create",
        format!("Create a {}", c.label),
        "201",
        Some(c.create),
        false,
    ));

    let mut item = PathItem::default();
    item.get = Some(
        operation(c, format!("get_{}", c.path), format!("Fetch a {}", c.label))
            .parameter(id_parameter("id", format!("{} id", c.label)))
            .response("200", response("The record", schema_ref(c.record)))
            .response("404", error_response(&format!("{} not found", c.label)))
            .build(),
    );
    item.put = Some(write_operation(
        c,
        "update",
        format!("Replace a {}; every required field must be present", c.label),
        "200",
        Some(c.update),
        true,
    ));
    item.patch = Some(write_operation(
        c,
        "patch",
        format!("Change the supplied fields of a {}", c.label),
        "200",
        Some(c.update),
        true,
    ));
    item.delete = Some(write_operation(
        c,
        "delete",
        format!("Delete a {}", c.label),
        "200",
        None,
        true,
    ));

    [
        (format!("/{}", c.path), items),
        (format!("/{}/{{id}}", c.path), item),
    ]
}

fn related_products(relation: &str, param: &str) -> (String, PathItem) {
    let mut item = PathItem::default();
    item.get = Some(
        OperationBuilder::new()
            .tags(Some(vec!["products".to_string()]))
            .operation_id(Some(format!("list_products_by_{}", relation)))
            .summary(Some(format!("Products of one {}", relation)))
            .parameter(id_parameter(param, format!("{} id", relation)))
            .response("200", response("Matching products", array_of("Product")))
            .build(),
    );
    (format!("/products/{}/{{{}}}", relation, param), item)
}

/// The full document: derived schemas plus the generated CRUD paths.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    for collection in &COLLECTIONS {
        for (path, item) in collection_paths(collection) {
            doc.paths.paths.insert(path, item);
        }
    }
    for (path, item) in [
        related_products("category", "categoryId"),
        related_products("brand", "brandId"),
    ] {
        doc.paths.paths.insert(path, item);
    }
    doc
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}
