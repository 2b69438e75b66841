//! Row-to-wire conversions
//!
//! Database rows carry `Option<RecordId>` ids and epoch-millisecond
//! timestamps; the wire models expose "table:key" string ids and UTC
//! datetimes.

use chrono::{DateTime, Utc};
use surrealdb::RecordId;

use crate::db::models::{CategoryRow, OrderRecord, ProductRow, SettingRow, VariantRow};
use shared::models::{Category, Order, Product, ProductVariant, Setting};

fn id_string(id: Option<RecordId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

pub fn order_to_wire(row: OrderRecord) -> Order {
    Order {
        id: id_string(row.id),
        order_id: row.order_no,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        phone: row.phone,
        address: row.address,
        city: row.city,
        postal_code: row.postal_code,
        province: row.province,
        district: row.district,
        notes: row.notes,
        products: row.products,
        subtotal: row.subtotal,
        delivery_fee: row.delivery_fee,
        total: row.total,
        payment_method: row.payment_method,
        bank_slip_url: row.bank_slip_url,
        status: row.status,
        paid: row.paid,
        tracking_number: row.tracking_number,
        order_date: row.order_date,
        created_at: millis_to_datetime(row.created_at),
    }
}

fn variant_to_wire(variant: VariantRow) -> ProductVariant {
    ProductVariant {
        id: variant.id,
        name: variant.name,
        price: variant.price,
        stock: variant.stock,
        sku: variant.sku,
        is_active: variant.is_active,
    }
}

pub fn product_to_wire(row: ProductRow) -> Product {
    let in_stock = row.in_stock();
    Product {
        id: id_string(row.id),
        title: row.title,
        slug: row.slug,
        description: row.description,
        price: row.price,
        images: row.images,
        category: row.category,
        variants: row.variants.into_iter().map(variant_to_wire).collect(),
        has_variants: row.has_variants,
        stock: row.stock,
        is_active: row.is_active,
        featured: row.featured,
        in_stock,
        created_at: millis_to_datetime(row.created_at),
    }
}

pub fn category_to_wire(row: CategoryRow) -> Category {
    Category {
        id: id_string(row.id),
        name: row.name,
        slug: row.slug,
        description: row.description,
        image: row.image,
        parent: row.parent,
        is_active: row.is_active,
        created_at: millis_to_datetime(row.created_at),
    }
}

pub fn setting_to_wire(row: SettingRow) -> Setting {
    Setting {
        id: id_string(row.id),
        name: row.name,
        value: row.value,
    }
}
