use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::model::{DashboardStats, LowStockProduct, RecentOrder, ReviewStats};
use crate::modules::auth::model::{Principal, Role, SessionResponse};
use crate::modules::cart::model::{
    AddItemDto, Cart, CartItem, CartLine, CartWithItems, GetOrCreateCartDto, UpdateItemDto,
};
use crate::modules::categories::model::{Category, CategoryWithProducts};
use crate::modules::customers::model::{
    CompanyInfo, CompanyLookup, Customer, UpdateCompanyInfoDto, UpdateProfileDto,
};
use crate::modules::discounts::model::{Discount, DiscountQuote, ValidateDiscountDto};
use crate::modules::orders::model::{
    BillingDataDto, CreateOrderDto, Order, OrderItem, OrderStatus, OrderWithItems,
    PaginatedOrdersResponse, PaymentStatus, ShippingDataDto, UpdateOrderStatusDto,
    UpdatePaymentStatusDto,
};
use crate::modules::payments::model::{
    ConfirmPaymentDto, ConfirmPaymentResponse, CreateIntentDto, FeeQuote, FeeQuoteDto,
    PaymentIntent, PaymentMethod,
};
use crate::modules::products::model::{PaginatedProductsResponse, Product, ProductFilterParams};
use crate::modules::reviews::model::{
    CreateReviewDto, ModerateReviewDto, ProductReviews, Review, ReviewStatus,
};
use crate::modules::shipping::model::{FreeShippingThreshold, ShippingMethod, ShippingQuote};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::me,
        crate::modules::auth::controller::session,
        crate::modules::products::controller::list_products,
        crate::modules::products::controller::get_product,
        crate::modules::products::controller::get_product_by_slug,
        crate::modules::products::controller::get_product_accessories,
        crate::modules::products::controller::get_featured_products,
        crate::modules::products::controller::get_new_products,
        crate::modules::products::controller::search_products,
        crate::modules::categories::controller::list_categories,
        crate::modules::categories::controller::get_category,
        crate::modules::categories::controller::get_category_by_slug,
        crate::modules::categories::controller::get_subcategories,
        crate::modules::categories::controller::get_category_with_products,
        crate::modules::cart::controller::get_or_create_cart,
        crate::modules::cart::controller::get_cart,
        crate::modules::cart::controller::add_item,
        crate::modules::cart::controller::update_item,
        crate::modules::cart::controller::remove_item,
        crate::modules::cart::controller::clear_cart,
        crate::modules::cart::controller::get_recommendations,
        crate::modules::discounts::controller::validate_discount,
        crate::modules::discounts::controller::get_active_discounts,
        crate::modules::orders::controller::create_order,
        crate::modules::orders::controller::get_order,
        crate::modules::orders::controller::get_orders_by_customer,
        crate::modules::orders::controller::update_order_status,
        crate::modules::orders::controller::update_payment_status,
        crate::modules::shipping::controller::get_methods,
        crate::modules::shipping::controller::get_method,
        crate::modules::shipping::controller::get_quote,
        crate::modules::shipping::controller::get_methods_by_country,
        crate::modules::shipping::controller::get_free_shipping_threshold,
        crate::modules::payments::controller::get_payment_methods,
        crate::modules::payments::controller::get_payment_method,
        crate::modules::payments::controller::quote_fee,
        crate::modules::payments::controller::create_intent,
        crate::modules::payments::controller::confirm_payment,
        crate::modules::customers::controller::get_profile,
        crate::modules::customers::controller::update_profile,
        crate::modules::customers::controller::get_company_info,
        crate::modules::customers::controller::update_company_info,
        crate::modules::customers::controller::get_customer_orders,
        crate::modules::customers::controller::lookup_company,
        crate::modules::reviews::controller::submit_review,
        crate::modules::reviews::controller::get_product_reviews,
        crate::modules::reviews::controller::get_pending_reviews,
        crate::modules::reviews::controller::moderate_review,
        crate::modules::admin::controller::get_dashboard,
    ),
    components(
        schemas(
            Principal,
            Role,
            SessionResponse,
            Product,
            ProductFilterParams,
            PaginatedProductsResponse,
            Category,
            CategoryWithProducts,
            Cart,
            CartItem,
            CartLine,
            CartWithItems,
            GetOrCreateCartDto,
            AddItemDto,
            UpdateItemDto,
            Discount,
            ValidateDiscountDto,
            DiscountQuote,
            Order,
            OrderItem,
            OrderWithItems,
            OrderStatus,
            PaymentStatus,
            BillingDataDto,
            ShippingDataDto,
            CreateOrderDto,
            UpdateOrderStatusDto,
            UpdatePaymentStatusDto,
            PaginatedOrdersResponse,
            ShippingMethod,
            ShippingQuote,
            FreeShippingThreshold,
            PaymentMethod,
            FeeQuoteDto,
            FeeQuote,
            CreateIntentDto,
            PaymentIntent,
            ConfirmPaymentDto,
            ConfirmPaymentResponse,
            Customer,
            UpdateProfileDto,
            CompanyInfo,
            UpdateCompanyInfoDto,
            CompanyLookup,
            Review,
            ReviewStatus,
            CreateReviewDto,
            ModerateReviewDto,
            ProductReviews,
            DashboardStats,
            LowStockProduct,
            RecentOrder,
            ReviewStats,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Session and principal resolution"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Categories", description = "Category tree endpoints"),
        (name = "Cart", description = "Shopping cart endpoints"),
        (name = "Discounts", description = "Discount code validation"),
        (name = "Orders", description = "Checkout and order management"),
        (name = "Shipping", description = "Shipping methods and quotes"),
        (name = "Payments", description = "Payment methods and fees"),
        (name = "Customers", description = "Customer profiles and company data"),
        (name = "Reviews", description = "Product reviews and moderation"),
        (name = "Admin", description = "Admin-only store statistics")
    ),
    info(
        title = "HDmobil API",
        version = "0.1.0",
        description = "E-commerce storefront REST API built with Rust, Axum, and PostgreSQL.",
        contact(
            name = "API Support",
            email = "support@hdmobil.sk"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
