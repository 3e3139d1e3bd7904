mod common;

use butik::domain::money::{MoneyFormat, Price};
use butik::domain::order::{NewOrder, OrderStatus};
use butik::domain::product::NewProduct;
use butik::domain::shipping::NewShippingProfile;
use butik::domain::tax::NewTax;
use butik::domain::types::{
    CategoryId, CategoryName, OrderId, ProductSlug, ProductTitle, ProfileTitle,
    ShippingProfileId, Stock, TaxId, TaxPercentage, TaxTitle, VariantTitle,
};
use butik::domain::variant::NewVariant;
use butik::repository::{
    CategoryReader, CategoryWriter, DieselRepository, OrderReader, OrderWriter, ProductListQuery,
    ProductReader, ProductWriter, ShippingProfileReader, ShippingProfileWriter, TaxReader,
    TaxWriter,
};
use common::TestDb;

fn seed_tax_and_profile(repo: &DieselRepository) {
    repo.create_tax(&NewTax {
        title: TaxTitle::new("Standard").unwrap(),
        percentage: TaxPercentage::new(19.0).unwrap(),
    })
    .unwrap();
    repo.create_shipping_profile(&NewShippingProfile {
        title: ProfileTitle::new("Standard shipping").unwrap(),
    })
    .unwrap();
}

fn sample_new_product(slug: &str) -> NewProduct {
    NewProduct {
        slug: ProductSlug::new(slug).unwrap(),
        title: ProductTitle::new("Leather shoe").unwrap(),
        description: None,
        price: Price::parse("2,00").unwrap(),
        stock: Stock::new(5).unwrap(),
        stock_unlimited: false,
        available: true,
        tax_id: TaxId::new(1).unwrap(),
        shipping_profile_id: ShippingProfileId::new(1).unwrap(),
    }
}

#[test]
fn product_round_trips_with_resolved_relations() {
    let db = TestDb::new();
    let repo = DieselRepository::new(db.pool());
    seed_tax_and_profile(&repo);

    repo.create_product(&sample_new_product("leather-shoe"), &[])
        .unwrap();

    let product = repo
        .get_product_by_slug(&ProductSlug::new("leather-shoe").unwrap())
        .unwrap()
        .expect("product should exist");

    let format = MoneyFormat::default();
    assert_eq!(product.price.minor_units(), 200);
    assert_eq!(product.price_display(&format), "2,00");
    assert_eq!(product.tax_amount(&format), "0,32");
    assert_eq!(product.tax.title.as_str(), "Standard");
    assert!(!product.is_sold_out());
    assert!(!product.has_variants());
}

#[test]
fn variants_are_resolved_and_found_by_original_title() {
    let db = TestDb::new();
    let repo = DieselRepository::new(db.pool());
    seed_tax_and_profile(&repo);

    repo.create_product(&sample_new_product("leather-shoe"), &[])
        .unwrap();
    repo.create_variant(&NewVariant {
        product_slug: ProductSlug::new("leather-shoe").unwrap(),
        title: VariantTitle::new("42 EU").unwrap(),
        original_title: VariantTitle::new("42 EU").unwrap(),
    })
    .unwrap();

    let product = repo
        .get_product_by_slug(&ProductSlug::new("leather-shoe").unwrap())
        .unwrap()
        .expect("product should exist");

    assert!(product.has_variants());
    assert!(product.variant("42 EU").is_some());
    assert!(product.variant("43 EU").is_none());
}

#[test]
fn listing_filters_by_availability_and_category() {
    let db = TestDb::new();
    let repo = DieselRepository::new(db.pool());
    seed_tax_and_profile(&repo);

    repo.create_category(&butik::domain::category::NewCategory {
        name: CategoryName::new("Shoes").unwrap(),
    })
    .unwrap();
    let categories = repo.list_categories().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name.as_str(), "Shoes");

    repo.create_product(&sample_new_product("leather-shoe"), &[CategoryId::new(1).unwrap()])
        .unwrap();
    let mut hidden = sample_new_product("hidden-shoe");
    hidden.available = false;
    repo.create_product(&hidden, &[]).unwrap();

    let (total, products) = repo
        .list_products(ProductListQuery::default().available_only())
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(products[0].slug.as_str(), "leather-shoe");
    assert_eq!(products[0].categories.len(), 1);

    let (total, _) = repo
        .list_products(ProductListQuery::default().category(CategoryName::new("Shoes").unwrap()))
        .unwrap();
    assert_eq!(total, 1);

    let (total, _) = repo
        .list_products(ProductListQuery::default().category(CategoryName::new("Hats").unwrap()))
        .unwrap();
    assert_eq!(total, 0);

    let (total, products) = repo
        .list_products(ProductListQuery::default().search("Leather").paginate(1, 1))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(products.len(), 1);
}

#[test]
fn deleting_a_shipping_profile_removes_exactly_one_row() {
    let db = TestDb::new();
    let repo = DieselRepository::new(db.pool());

    repo.create_shipping_profile(&NewShippingProfile {
        title: ProfileTitle::new("Standard shipping").unwrap(),
    })
    .unwrap();
    repo.create_shipping_profile(&NewShippingProfile {
        title: ProfileTitle::new("Express shipping").unwrap(),
    })
    .unwrap();

    let before = repo.list_shipping_profiles().unwrap();
    assert_eq!(before.len(), 2);

    let removed = repo
        .delete_shipping_profile(ShippingProfileId::new(1).unwrap())
        .unwrap();
    assert_eq!(removed, 1);

    let after = repo.list_shipping_profiles().unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].title.as_str(), "Express shipping");
}

#[test]
fn deleting_a_profile_keeps_referencing_products() {
    let db = TestDb::new();
    let repo = DieselRepository::new(db.pool());
    seed_tax_and_profile(&repo);

    repo.create_product(&sample_new_product("leather-shoe"), &[])
        .unwrap();
    repo.delete_shipping_profile(ShippingProfileId::new(1).unwrap())
        .unwrap();

    let product = repo
        .get_product_by_slug(&ProductSlug::new("leather-shoe").unwrap())
        .unwrap()
        .expect("product should survive profile deletion");
    assert_eq!(product.shipping_profile_id.get(), 1);
}

#[test]
fn orders_round_trip_with_status_and_total() {
    let db = TestDb::new();
    let repo = DieselRepository::new(db.pool());

    repo.create_order(&NewOrder {
        status: OrderStatus::Paid,
        customer: r#"{"first_name":"Jonas"}"#.to_string(),
        total: Price::new(200).unwrap(),
    })
    .unwrap();

    let order = repo
        .get_order_by_id(OrderId::new(1).unwrap())
        .unwrap()
        .expect("order should exist");
    assert_eq!(order.status, OrderStatus::Paid);
    assert_eq!(order.total.minor_units(), 200);

    assert!(
        repo.get_order_by_id(OrderId::new(99).unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn missing_tax_and_profile_lookups_return_none() {
    let db = TestDb::new();
    let repo = DieselRepository::new(db.pool());

    assert!(repo.get_tax_by_id(TaxId::new(1).unwrap()).unwrap().is_none());
    assert!(
        repo.get_shipping_profile_by_id(ShippingProfileId::new(1).unwrap())
            .unwrap()
            .is_none()
    );
}
