use crate::weather::types::WeatherInfo;

/// Render the weather summary page. Fixed template, no client-side assets.
pub fn render_weather(city: &str, info: &WeatherInfo) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Weather for {city}</title></head>\n\
         <body>\n\
         <h1>City: {city}!</h1>\n\
         <p>{description}</p>\n\
         <p>{temp} ºC</p>\n\
         <p>Min: {temp_min} ºC / Max: {temp_max} ºC</p>\n\
         <p>Sunrise: {sunrise}</p>\n\
         <p>Sunset: {sunset}</p>\n\
         </body>\n\
         </html>\n",
        city = escape(city),
        description = escape(&info.description),
        temp = info.temp,
        temp_min = info.temp_min,
        temp_max = info.temp_max,
        sunrise = info.sunrise,
        sunset = info.sunset,
    )
}

// City comes straight from the query string.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
