//! Product CRUD routes.
//!
//! The form mirrors the normalization defaults: what an operator leaves
//! blank lands in the backend exactly as normalization would have filled
//! it, so storefront and admin never disagree about a product's shape.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::{Deserialize, Deserializer};
use tracing::instrument;

use paraiso_core::normalize::{DEFAULT_CATEGORY, DEFAULT_RATING, DEFAULT_STOCK, PLACEHOLDER_IMAGE};
use paraiso_core::{Product, ProductId, Slug};

use crate::backend::ProductRecord;
use crate::error::AdminError;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Deserialize empty strings as None for optional numeric fields.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Dashboard template: the live product table.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_email: String,
    pub products: Vec<Product>,
    /// Raw backend detail when the read failed; the table renders empty.
    pub error: Option<String>,
}

/// Create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "product_form.html")]
pub struct ProductFormTemplate {
    pub admin_email: String,
    pub heading: &'static str,
    /// Where the form posts to.
    pub action: String,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub price: i64,
    pub material: String,
    pub stock: i64,
    pub rating: f64,
    pub image: String,
    pub featured: bool,
    pub in_stock: bool,
}

/// Product form data. Checkboxes arrive only when checked.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub price: Option<i64>,
    #[serde(default)]
    pub material: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub stock: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub in_stock: Option<String>,
}

impl ProductForm {
    /// Apply the normalization defaults and build the backend row.
    ///
    /// # Errors
    ///
    /// `AdminError::BadRequest` for a negative price or stock, or a name
    /// that yields no usable slug.
    fn into_record(self) -> Result<ProductRecord, AdminError> {
        let price = self.price.unwrap_or(0);
        if price < 0 {
            return Err(AdminError::BadRequest(
                "El precio no puede ser negativo".to_string(),
            ));
        }
        let stock = self.stock.unwrap_or_else(|| i64::from(DEFAULT_STOCK));
        if stock < 0 {
            return Err(AdminError::BadRequest(
                "El stock no puede ser negativo".to_string(),
            ));
        }

        let slug = match Slug::parse(&self.slug) {
            Ok(slug) => slug,
            Err(_) => Slug::from_name(&self.name).ok_or_else(|| {
                AdminError::BadRequest("El nombre no produce un slug válido".to_string())
            })?,
        };

        Ok(ProductRecord {
            slug: slug.to_string(),
            name_es: self.name,
            description_es: Some(self.description).filter(|d| !d.is_empty()),
            price_ars: price,
            image_url: if self.image.is_empty() {
                PLACEHOLDER_IMAGE.to_string()
            } else {
                self.image
            },
            category: if self.category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                self.category
            },
            material: Some(self.material).filter(|m| !m.is_empty()),
            stock,
            rating: self.rating.unwrap_or(DEFAULT_RATING),
            featured: self.featured.is_some(),
            in_stock: self.in_stock.is_some(),
        })
    }
}

/// Dashboard: live product table.
///
/// A failed read degrades to an empty table with the raw detail in a
/// banner; the operator can still reach the create form.
#[instrument(skip(state, admin))]
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
) -> DashboardTemplate {
    let (products, error) = match state.catalog().list_products().await {
        Ok(products) => (products, None),
        Err(e) => {
            tracing::error!(error = %e, "dashboard product read failed");
            (Vec::new(), Some(e.to_string()))
        }
    };

    DashboardTemplate {
        admin_email: admin.email,
        products,
        error,
    }
}

/// Empty create form.
#[instrument(skip(admin))]
pub async fn new_form(RequireAdminAuth(admin): RequireAdminAuth) -> ProductFormTemplate {
    ProductFormTemplate {
        admin_email: admin.email,
        heading: "Nuevo producto",
        action: "/products".to_string(),
        name: String::new(),
        slug: String::new(),
        category: String::new(),
        description: String::new(),
        price: 0,
        material: String::new(),
        stock: i64::from(DEFAULT_STOCK),
        rating: DEFAULT_RATING,
        image: String::new(),
        featured: false,
        in_stock: true,
    }
}

/// Edit form, pre-filled from the live row.
#[instrument(skip(state, admin))]
pub async fn edit_form(
    State(state): State<AppState>,
    RequireAdminAuth(admin): RequireAdminAuth,
    Path(id): Path<String>,
) -> Result<ProductFormTemplate, AdminError> {
    let id = ProductId::new(id);
    let products = state.catalog().list_products().await?;
    let product = products
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AdminError::NotFound(id.to_string()))?;

    Ok(ProductFormTemplate {
        admin_email: admin.email,
        heading: "Editar producto",
        action: format!("/products/{id}"),
        name: product.name,
        slug: product.slug.to_string(),
        category: product.category,
        description: product.description,
        price: product.price.pesos(),
        material: product.material.unwrap_or_default(),
        stock: i64::from(product.stock),
        rating: product.rating,
        image: product.image,
        featured: product.featured,
        in_stock: product.in_stock,
    })
}

/// Create a product. A backend rejection aborts and surfaces verbatim.
#[instrument(skip(state, _admin, form))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, AdminError> {
    let record = form.into_record()?;
    state.catalog().create_product(&record).await?;
    tracing::info!(slug = %record.slug, "product created");
    Ok(Redirect::to("/"))
}

/// Update a product by id.
#[instrument(skip(state, _admin, form))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, AdminError> {
    let id = ProductId::new(id);
    let record = form.into_record()?;
    state.catalog().update_product(&id, &record).await?;
    tracing::info!(product = %id, "product updated");
    Ok(Redirect::to("/"))
}

/// Delete a product by id.
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<String>,
) -> Result<Redirect, AdminError> {
    let id = ProductId::new(id);
    state.catalog().delete_product(&id).await?;
    tracing::info!(product = %id, "product deleted");
    Ok(Redirect::to("/"))
}
