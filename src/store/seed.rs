//! Стартовые мок-данные каталога. Повторяют афишу демо-стенда.

use chrono::NaiveDate;

use crate::models::{Location, Movie, Showtime, User};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn movie(
    id: &str,
    title: &str,
    poster_url: &str,
    backdrop_url: &str,
    release_date: NaiveDate,
    duration: u32,
    genres: &[&str],
    rating: f32,
    description: &str,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        poster_url: poster_url.to_string(),
        backdrop_url: backdrop_url.to_string(),
        release_date,
        duration,
        genres: genres.iter().map(|g| g.to_string()).collect(),
        rating,
        description: description.to_string(),
    }
}

pub fn movies() -> Vec<Movie> {
    vec![
        movie(
            "1",
            "Inception",
            "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_.jpg",
            "https://wallpapercave.com/wp/hquoZQy.jpg",
            date(2010, 7, 16),
            148,
            &["Action", "Sci-Fi", "Thriller"],
            8.8,
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        ),
        movie(
            "2",
            "The Dark Knight",
            "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_.jpg",
            "https://wallpaperaccess.com/full/1093736.jpg",
            date(2008, 7, 18),
            152,
            &["Action", "Crime", "Drama"],
            9.0,
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
        ),
        movie(
            "3",
            "Interstellar",
            "https://m.media-amazon.com/images/M/MV5BZjdkOTU3MDktN2IxOS00OGEyLWFmMjktY2FiMmZkNWIyODZiXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_.jpg",
            "https://wallpapercave.com/wp/wp1817955.jpg",
            date(2014, 11, 7),
            169,
            &["Adventure", "Drama", "Sci-Fi"],
            8.6,
            "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        ),
        movie(
            "4",
            "The Shawshank Redemption",
            "https://m.media-amazon.com/images/M/MV5BMDFkYTc0MGEtZmNhMC00ZDIzLWFmNTEtODM1ZmRlYWMwMWFmXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_.jpg",
            "https://wallpapercave.com/wp/wp2014257.jpg",
            date(1994, 10, 14),
            142,
            &["Drama"],
            9.3,
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        ),
        movie(
            "5",
            "The Matrix",
            "https://m.media-amazon.com/images/M/MV5BNzQzOTk3OTAtNDQ0Zi00ZTVkLWI0MTEtMDllZjNkYzNjNTc4L2ltYWdlXkEyXkFqcGdeQXVyNjU0OTQ0OTY@._V1_.jpg",
            "https://wallpapercave.com/wp/aZeUaca.jpg",
            date(1999, 3, 31),
            136,
            &["Action", "Sci-Fi"],
            8.7,
            "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
        ),
        movie(
            "6",
            "Pulp Fiction",
            "https://m.media-amazon.com/images/M/MV5BNGNhMDIzZTUtNTBlZi00MTRlLWFjM2ItYzViMjE3YzI5MjljXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_.jpg",
            "https://wallpapercave.com/wp/wp1853383.jpg",
            date(1994, 10, 14),
            154,
            &["Crime", "Drama"],
            8.9,
            "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
        ),
    ]
}

fn showtime(id: &str, movie_id: &str, location_id: &str, time: &str, auditorium: &str) -> Showtime {
    Showtime {
        id: id.to_string(),
        movie_id: movie_id.to_string(),
        location_id: location_id.to_string(),
        date: date(2025, 5, 17),
        time: time.to_string(),
        auditorium: auditorium.to_string(),
    }
}

pub fn showtimes() -> Vec<Showtime> {
    vec![
        // Inception
        showtime("1", "1", "1", "14:30", "Hall 1"),
        showtime("2", "1", "1", "18:00", "Hall 2"),
        showtime("3", "1", "1", "21:30", "Hall 1"),
        showtime("4", "1", "2", "15:00", "Hall 3"),
        showtime("5", "1", "2", "19:30", "Hall 1"),
        // The Dark Knight
        showtime("6", "2", "1", "13:00", "Hall 3"),
        showtime("7", "2", "1", "16:30", "Hall 2"),
        showtime("8", "2", "1", "20:00", "Hall 3"),
        showtime("9", "2", "2", "14:00", "Hall 2"),
        showtime("10", "2", "2", "18:30", "Hall 3"),
        // Остальные фильмы
        showtime("11", "3", "1", "15:30", "Hall 1"),
        showtime("12", "3", "2", "19:00", "Hall 2"),
        showtime("13", "4", "1", "16:00", "Hall 3"),
        showtime("14", "4", "2", "20:30", "Hall 1"),
        showtime("15", "5", "1", "17:30", "Hall 2"),
        showtime("16", "5", "2", "21:00", "Hall 3"),
    ]
}

pub fn locations() -> Vec<Location> {
    let raw = [
        ("1", "Downtown Cinema", "New York"),
        ("2", "Westside Multiplex", "New York"),
        ("3", "Harbor View Cinema", "San Francisco"),
        ("4", "Sunset Boulevard Theater", "Los Angeles"),
        ("5", "Lakeside IMAX", "Chicago"),
    ];
    raw.iter()
        .map(|(id, name, city)| Location {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
        })
        .collect()
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "password123".to_string(),
        },
        User {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            password: "password123".to_string(),
        },
    ]
}
