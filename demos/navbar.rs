use bootstrap_nav_menu::{ItemSpacing, MenuItem, NavMenu, RenderOptions, CURRENT_ITEM_CLASS};

fn main() -> std::io::Result<()> {
    let items = vec![
        MenuItem::new_leaf(1, "Home").url("/").class(CURRENT_ITEM_CLASS),
        MenuItem::new(
            2,
            "Products",
            vec![
                MenuItem::new_leaf(21, "Alpha").url("/products/alpha"),
                MenuItem::new_leaf(22, "Beta")
                    .url("/products/beta")
                    .tooltip("Still in preview"),
            ],
        )?,
        MenuItem::new_leaf(3, "Docs")
            .url("https://docs.example.com")
            .target("_blank")
            .rel("noopener"),
    ];

    let menu = NavMenu::new(items)?;
    println!("{}", menu.render());

    println!("--- compact ---");
    let compact = NavMenu::new(menu.items().to_vec())?
        .options(RenderOptions::new().item_spacing(ItemSpacing::Discard));
    println!("{}", compact.render());

    println!("--- fallback shown to a user who may manage menus ---");
    let options: RenderOptions<'_, i32> = RenderOptions::new()
        .container("nav")
        .container_class("navbar navbar-expand-lg")
        .menu_class("navbar-nav");
    println!(
        "{}",
        bootstrap_nav_menu::render_fallback(
            &options,
            &bootstrap_nav_menu::HtmlEscape,
            true,
            "/admin/menus",
        )
    );
    Ok(())
}
