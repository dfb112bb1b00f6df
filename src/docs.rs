use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        description = "Catalog of movies with genres and poster images"
    ),
    paths(
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            crate::modules::genre::dto::GenreRequest,
            crate::modules::genre::dto::GenreResponse,
            crate::modules::movie::model::Movie,
            crate::modules::movie::model::MovieView,
        )
    ),
    tags(
        (name = "Genres", description = "Genre management"),
        (name = "Movies", description = "Movie records and posters")
    )
)]
pub struct ApiDoc;
