pub mod openai_generate_images_response;
