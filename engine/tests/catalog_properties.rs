use engine::catalog::{CategoryFilter, Product, SortKey, ViewMode, categories, filter_sort, locale_cmp};
use engine::layout::grid_shape;
use engine::theme::LayoutType;
use proptest::prelude::*;
use std::cmp::Ordering;

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        0u64..10_000,
        "[a-zA-Z ]{0,12}",
        0u32..50_000,
        "[a-z ]{0,20}",
        prop::sample::select(vec!["electronics", "books", "garden", "Books"]),
        0u32..=100,
    )
        .prop_map(|(id, title, cents, description, category, discount)| Product {
            id,
            title,
            price: f64::from(cents) / 100.0,
            description,
            category: category.to_string(),
            image: String::new(),
            discount,
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..40).prop_map(|mut products| {
        // Unique ids so stability can be checked by position
        for (i, product) in products.iter_mut().enumerate() {
            product.id = i as u64;
        }
        products
    })
}

#[cfg(test)]
mod filter_sort_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_empty_term_keeps_every_product(products in catalog_strategy()) {
            let result = filter_sort(&products, "", &CategoryFilter::All, SortKey::Name);

            // Property: nothing is filtered out
            prop_assert_eq!(result.len(), products.len());

            // Property: titles are ordered and ties keep input order
            for pair in result.windows(2) {
                let ordering = locale_cmp(&pair[0].title, &pair[1].title);
                prop_assert!(ordering != Ordering::Greater);
                if ordering == Ordering::Equal {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }

        #[test]
        fn test_price_sort_is_stable(products in catalog_strategy()) {
            let result = filter_sort(&products, "", &CategoryFilter::All, SortKey::Price);

            for pair in result.windows(2) {
                prop_assert!(pair[0].price <= pair[1].price);
                if pair[0].price == pair[1].price {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }

        #[test]
        fn test_results_satisfy_the_predicate(
            products in catalog_strategy(),
            term in "[a-zA-Z]{0,3}",
            category in prop::sample::select(vec!["all", "electronics", "books", "Books"]),
        ) {
            let filter = CategoryFilter::from(category);
            let result = filter_sort(&products, &term, &filter, SortKey::Category);
            let needle = term.to_lowercase();

            for product in &result {
                prop_assert!(
                    product.title.to_lowercase().contains(&needle)
                        || product.description.to_lowercase().contains(&needle)
                );
                prop_assert!(filter.matches(&product.category));
            }

            // Property: nothing that matches is dropped
            let expected = products
                .iter()
                .filter(|p| {
                    (p.title.to_lowercase().contains(&needle)
                        || p.description.to_lowercase().contains(&needle))
                        && filter.matches(&p.category)
                })
                .count();
            prop_assert_eq!(result.len(), expected);
        }

        #[test]
        fn test_unmatched_term_yields_nothing(products in catalog_strategy()) {
            // Generated titles and descriptions never contain digits or hyphens
            let result = filter_sort(&products, "zzz-no-match", &CategoryFilter::All, SortKey::Name);
            prop_assert!(result.is_empty());
        }

        #[test]
        fn test_categories_are_distinct_and_prefixed(products in catalog_strategy()) {
            let universe = categories(&products);

            prop_assert_eq!(universe[0].as_str(), "all");
            for (i, category) in universe.iter().enumerate().skip(1) {
                prop_assert!(!universe[i + 1..].contains(category));
                prop_assert!(products.iter().any(|p| &p.category == category));
            }
            for product in &products {
                prop_assert!(universe.contains(&product.category));
            }
        }
    }
}

#[cfg(test)]
mod layout_properties {
    use super::*;

    fn layout_strategy() -> impl Strategy<Value = LayoutType> {
        prop::sample::select(vec![LayoutType::Standard, LayoutType::Sidebar, LayoutType::Grid])
    }

    proptest! {
        #[test]
        fn test_columns_never_decrease_with_width(
            layout in layout_strategy(),
            a in 0u32..3000,
            b in 0u32..3000,
        ) {
            let shape = grid_shape(layout, ViewMode::Grid);
            let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(shape.columns_at(narrow) <= shape.columns_at(wide));
            prop_assert!(shape.columns_at(wide) <= shape.max_columns());
        }

        #[test]
        fn test_list_view_is_single_column(layout in layout_strategy(), width in 0u32..5000) {
            prop_assert_eq!(grid_shape(layout, ViewMode::List).columns_at(width), 1);
        }

        #[test]
        fn test_sidebar_never_exceeds_three_columns(width in 0u32..10_000) {
            prop_assert!(grid_shape(LayoutType::Sidebar, ViewMode::Grid).columns_at(width) <= 3);
        }
    }
}
