#![allow(dead_code)]

use prodcat::Dataset;

pub const PRODUCTS: &[(&str, &str)] = &[
    ("Samsung Galaxy A52 smartphone 128GB dual sim", "Mobile Phones"),
    ("Apple iPhone 12 smartphone 64GB", "Mobile Phones"),
    ("Xiaomi Redmi Note smartphone dual sim", "Mobile Phones"),
    ("Nokia smartphone 32GB unlocked", "Mobile Phones"),
    ("Google Pixel smartphone 128GB unlocked", "Mobile Phones"),
    ("Motorola Moto smartphone dual sim 64GB", "Mobile Phones"),
    ("Samsung Galaxy smartphone unlocked", "Mobile Phones"),
    ("Apple iPhone smartphone 128GB unlocked", "Mobile Phones"),
    ("Huawei smartphone dual sim 64GB", "Mobile Phones"),
    ("OnePlus Nord smartphone 128GB", "Mobile Phones"),
    ("Bosch fridge freezer frost free white", "Fridge Freezers"),
    ("Beko fridge freezer 300 litre", "Fridge Freezers"),
    ("Hotpoint fridge freezer frost free silver", "Fridge Freezers"),
    ("Indesit fridge freezer 250 litre white", "Fridge Freezers"),
    ("LG American fridge freezer frost free", "Fridge Freezers"),
    ("Hisense fridge freezer 300 litre silver", "Fridge Freezers"),
    ("Liebherr fridge freezer frost free", "Fridge Freezers"),
    ("Bosch fridge freezer 250 litre", "Fridge Freezers"),
    ("Smeg retro fridge freezer cream", "Fridge Freezers"),
    ("Beko fridge freezer frost free white", "Fridge Freezers"),
    ("Bosch washing machine 8kg 1400 rpm", "Washing Machines"),
    ("Hoover washing machine 9kg quick wash", "Washing Machines"),
    ("Candy washing machine 7kg 1200 rpm", "Washing Machines"),
    ("Miele washing machine 8kg quick wash", "Washing Machines"),
    ("Zanussi washing machine 9kg 1400 rpm", "Washing Machines"),
    ("AEG washing machine 8kg steam", "Washing Machines"),
    ("Indesit washing machine 7kg quick wash", "Washing Machines"),
    ("Whirlpool washing machine 9kg 1200 rpm", "Washing Machines"),
    ("Haier washing machine 10kg steam", "Washing Machines"),
    ("Grundig washing machine 8kg 1400 rpm", "Washing Machines"),
];

pub fn dataset() -> Dataset {
    Dataset {
        titles: PRODUCTS.iter().map(|(t, _)| t.to_string()).collect(),
        labels: PRODUCTS.iter().map(|(_, l)| l.to_string()).collect(),
    }
}

/// Renders the fixture as CSV with padded headers and an extra column.
pub fn csv_text() -> String {
    let mut text = String::from(" Product Title , Category Label ,Stock\n");
    for (i, (title, label)) in PRODUCTS.iter().enumerate() {
        text.push_str(&format!("\"{}\",{},{}\n", title, label, i));
    }
    text
}
