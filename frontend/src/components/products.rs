use serde::Deserialize;
use yew::prelude::*;

use crate::config;
use crate::i18n::use_i18n;

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

#[function_component(ProductsSection)]
pub fn products_section() -> Html {
    let i18n = use_i18n();
    let products: Vec<Product> = i18n.objects("products.items");

    html! {
        <section id="products" class="products">
            <div class="section-header">
                <span class="products-badge">{i18n.t("products.badge")}</span>
                <h2>{i18n.t("products.title")}</h2>
                <p>{i18n.t("products.subtitle")}</p>
                <p class="products-note">{i18n.t("products.description")}</p>
            </div>
            <div class="product-grid">
                { for products.iter().map(|product| html! {
                    <article key={product.id.clone()} class="product">
                        <div class="product-image">
                            <img src={product.image.clone()} alt={product.title.clone()} />
                            <span class="product-category">{&product.category}</span>
                        </div>
                        <div class="product-body">
                            <h3>{&product.title}</h3>
                            <p class="product-subtitle">{&product.subtitle}</p>
                            <p>{&product.description}</p>
                            <a href={config::SHOP_URL} target="_blank" rel="noopener noreferrer" class="product-cta">
                                {i18n.t("products.shopNow")}
                            </a>
                        </div>
                    </article>
                }) }
            </div>
            <div class="products-more">
                <a href={config::SHOP_URL} target="_blank" rel="noopener noreferrer">{i18n.t("products.viewAll")}{" →"}</a>
            </div>
            <style>
                {r#"
                .products {
                    padding: 6rem 1rem;
                    background: linear-gradient(to bottom right, #f9fafb, #f1f5f9, #f3f4f6);
                }
                .products-badge {
                    padding: 0.75rem 2rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #fff;
                    background: #000;
                    border-radius: 9999px;
                }
                .products-note {
                    font-size: 1rem;
                    color: rgba(0, 0, 0, 0.6);
                }
                .product-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .product {
                    background: #fff;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }
                .product:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                .product-image {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                }
                .product-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .product-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    background: rgba(0, 0, 0, 0.8);
                    color: #fff;
                    font-size: 0.75rem;
                    border-radius: 9999px;
                }
                .product-body {
                    padding: 1.5rem;
                }
                .product-subtitle {
                    color: #6b7280;
                    font-weight: 600;
                }
                .product-cta {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.75rem 1.5rem;
                    background: #000;
                    color: #fff;
                    border-radius: 0.75rem;
                    text-decoration: none;
                    font-weight: 600;
                }
                .products-more {
                    text-align: center;
                    margin-top: 3rem;
                }
                .products-more a {
                    color: #000;
                    font-weight: 600;
                }
                @media (max-width: 1024px) {
                    .product-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
