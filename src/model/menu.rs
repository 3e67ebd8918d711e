use serde::{Deserialize, Serialize};

/// Menu section a [`MenuItem`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Drink,
    Food,
}

/// A catalog-defined menu item.
///
/// Prices are integer rupiah (minor units); the display layer is responsible for
/// grouping and the currency prefix. The `image` field is an opaque URI handed to
/// the image loader, which substitutes [`PLACEHOLDER_IMAGE`] on load failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub image: String,
    pub category: Category,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
            category,
        }
    }
}

/// Substitute URI the image loader falls back to when a menu image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=Image+Not+Found";

/// The fixed house menu: six drinks and six foods.
///
/// The catalog never changes at runtime; callers filter by [`Category`] to build
/// the menu tabs and pass whole items to the session when adding to the cart.
pub fn house_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "1",
            "Kopi Tubruk",
            "Kopi tradisional Indonesia yang diseduh dengan cara tubruk",
            15000,
            "https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=400&h=300&fit=crop",
            Category::Drink,
        ),
        MenuItem::new(
            "2",
            "Kopi Latte",
            "Espresso dengan susu steamed yang creamy",
            25000,
            "https://images.unsplash.com/photo-1570968915860-54d5c301fa9f?w=400&h=300&fit=crop",
            Category::Drink,
        ),
        MenuItem::new(
            "3",
            "Cappuccino",
            "Espresso dengan foam susu yang lembut",
            23000,
            "https://images.unsplash.com/photo-1572442388796-11668a67e53d?w=400&h=300&fit=crop",
            Category::Drink,
        ),
        MenuItem::new(
            "4",
            "Es Kopi Susu",
            "Kopi dingin dengan susu segar",
            18000,
            "https://images.unsplash.com/photo-1461023058943-07fcbe16d735?w=400&h=300&fit=crop",
            Category::Drink,
        ),
        MenuItem::new(
            "5",
            "Teh Tarik",
            "Teh susu yang ditarik dengan teknik khusus",
            12000,
            "https://images.unsplash.com/photo-1556679343-c7306c1976bc?w=400&h=300&fit=crop",
            Category::Drink,
        ),
        MenuItem::new(
            "6",
            "Jus Jeruk",
            "Jus jeruk segar tanpa gula tambahan",
            15000,
            "https://images.unsplash.com/photo-1613478223719-2ab802602423?w=400&h=300&fit=crop",
            Category::Drink,
        ),
        MenuItem::new(
            "7",
            "Nasi Gudeg",
            "Nasi dengan gudeg khas Yogyakarta",
            35000,
            "https://images.unsplash.com/photo-1565299507177-b0ac66763828?w=400&h=300&fit=crop",
            Category::Food,
        ),
        MenuItem::new(
            "8",
            "Gado-Gado",
            "Sayuran segar dengan bumbu kacang",
            25000,
            "https://images.unsplash.com/photo-1512058564366-18510be2db19?w=400&h=300&fit=crop",
            Category::Food,
        ),
        MenuItem::new(
            "9",
            "Sate Ayam",
            "Sate ayam dengan bumbu kacang dan lontong",
            30000,
            "https://images.unsplash.com/photo-1529563021893-cc83c992d75d?w=400&h=300&fit=crop",
            Category::Food,
        ),
        MenuItem::new(
            "10",
            "Pisang Goreng",
            "Pisang goreng crispy dengan taburan gula",
            12000,
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=300&fit=crop",
            Category::Food,
        ),
        MenuItem::new(
            "11",
            "Croissant",
            "Roti croissant dengan mentega premium",
            20000,
            "https://images.unsplash.com/photo-1530610476181-d83430b64dcd?w=400&h=300&fit=crop",
            Category::Food,
        ),
        MenuItem::new(
            "12",
            "Sandwich",
            "Sandwich dengan isian daging dan sayuran segar",
            28000,
            "https://images.unsplash.com/photo-1528735602780-2552fd46c7af?w=400&h=300&fit=crop",
            Category::Food,
        ),
    ]
}
