//! Reference tables used to generate synthetic dogs.
//!
//! Table order is significant: the seeder indexes into these slices with
//! values drawn from a seeded generator, so reordering entries changes the
//! generated data.

/// A breed with its typical adult weight range in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreedProfile {
    pub breed: &'static str,
    pub min_weight: f64,
    pub max_weight: f64,
}

const fn profile(breed: &'static str, min_weight: f64, max_weight: f64) -> BreedProfile {
    BreedProfile {
        breed,
        min_weight,
        max_weight,
    }
}

pub const BREEDS: &[BreedProfile] = &[
    profile("Labrador Retriever", 25.0, 36.0),
    profile("Golden Retriever", 25.0, 34.0),
    profile("German Shepherd", 22.0, 40.0),
    profile("Bulldog", 18.0, 25.0),
    profile("Poodle", 18.0, 32.0),
    profile("Beagle", 9.0, 11.0),
    profile("Rottweiler", 35.0, 60.0),
    profile("Dachshund", 7.0, 14.5),
    profile("Yorkshire Terrier", 2.0, 3.2),
    profile("Boxer", 25.0, 32.0),
    profile("Siberian Husky", 16.0, 27.0),
    profile("Pomeranian", 1.4, 3.2),
    profile("Shih Tzu", 4.0, 7.3),
    profile("Border Collie", 12.0, 20.0),
    profile("Doberman Pinscher", 27.0, 45.0),
    profile("Australian Shepherd", 18.0, 29.0),
    profile("Cavalier King Charles Spaniel", 5.4, 8.2),
    profile("Miniature Schnauzer", 5.0, 9.0),
    profile("Cocker Spaniel", 12.0, 16.0),
    profile("Pug", 6.0, 8.0),
    profile("Great Dane", 45.0, 90.0),
    profile("Chihuahua", 1.5, 3.0),
    profile("Maltese", 1.4, 3.6),
    profile("Bernese Mountain Dog", 32.0, 52.0),
    profile("French Bulldog", 8.0, 13.0),
    profile("Weimaraner", 25.0, 40.0),
    profile("Dalmatian", 20.0, 32.0),
    profile("Akita", 32.0, 59.0),
    profile("Whippet", 6.8, 14.0),
    profile("Basset Hound", 20.0, 29.0),
];

pub const DOG_NAMES: &[&str] = &[
    "Rex", "Buddy", "Max", "Charlie", "Cooper", "Rocky", "Bear", "Duke", "Tucker", "Jack", "Toby",
    "Milo", "Oliver", "Leo", "Zeus", "Loki", "Benny", "Oscar", "Finn", "Hank", "Gus", "Bruno",
    "Archie", "Thor", "Louie", "Murphy", "Baxter", "Moose", "Jasper", "Scout", "Luna", "Bella",
    "Daisy", "Lucy", "Sadie", "Molly", "Maggie", "Chloe", "Sophie", "Stella", "Penny", "Nala",
    "Rosie", "Ruby", "Lola", "Coco", "Willow", "Hazel", "Ellie", "Pepper", "Ginger", "Roxy",
    "Sasha", "Mia", "Piper", "Winnie", "Abby", "Zoey", "Gracie", "Honey",
];
